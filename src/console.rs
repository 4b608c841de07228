//! Line-oriented stand-in for the touch panel
//!
//! Rows and the keyboard buffer are printed to a writer; each input line
//! becomes one or more discrete events.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use tracing::warn;

use pstnav::filesystem::Storage;
use pstnav::input::{Event, Key, Mode, parse_key};
use pstnav::render::{DisplayLock, Surface};
use pstnav::{Panel, Row, RowKind};

pub struct ConsoleSurface<W: Write> {
    lock: DisplayLock,
    out: W,
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            lock: DisplayLock::new(),
            out,
        }
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            warn!(error = %e, "console write failed");
        }
    }
}

fn marker(kind: RowKind) -> &'static str {
    match kind {
        RowKind::Parent => "<-",
        RowKind::Directory => "[]",
        RowKind::File => "  ",
        RowKind::Unavailable => "!!",
    }
}

impl<W: Write> Surface for ConsoleSurface<W> {
    fn acquire_lock(&mut self, timeout: Duration) -> bool {
        self.lock.try_acquire(timeout)
    }

    fn release_lock(&mut self) {
        self.lock.release();
    }

    fn render_rows(&mut self, rows: &[Row]) {
        for (i, row) in rows.iter().enumerate() {
            let text = format!("{i:>3} {} {}", marker(row.kind), row.name);
            self.line(&text);
        }
    }

    fn render_label(&mut self, text: &str) {
        self.line(&format!("== {text}"));
    }

    fn render_text_buffer(&mut self, text: &str) {
        self.line(&format!("> {text}_"));
    }

    fn show_keyboard(&mut self, prompt: &str) {
        self.line(&format!("-- {prompt}"));
    }

    fn hide_keyboard(&mut self) {
        self.line("--");
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Events(Vec<Event>),
    Quit,
}

pub fn parse_line(mode: Mode, line: &str) -> Command {
    match mode {
        Mode::Browsing => parse_browsing_line(line.trim()),
        Mode::Typing => parse_typing_line(line),
    }
}

fn parse_browsing_line(line: &str) -> Command {
    let event = match line {
        "q" | "quit" => return Command::Quit,
        "b" | "back" => Some(Event::BackTapped),
        "/" | "search" => Some(Event::HeaderTapped),
        _ => line.parse::<usize>().ok().map(Event::EntryTapped),
    };
    Command::Events(event.into_iter().collect())
}

fn parse_typing_line(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    if line == "!" {
        return Command::Events(vec![Event::BackdropTapped]);
    }
    if let Some(key) = parse_key(line.trim()).filter(|k| !matches!(k, Key::Char(_))) {
        return Command::Events(vec![Event::KeyTapped(key)]);
    }
    let events = line
        .chars()
        .filter_map(|c| parse_key(c.encode_utf8(&mut [0; 4])))
        .map(Event::KeyTapped)
        .collect();
    Command::Events(events)
}

/// Feed `input` to the panel until EOF or quit.
pub fn run<S, W, R>(panel: &mut Panel<S>, ui: &mut ConsoleSurface<W>, input: R) -> io::Result<()>
where
    S: Storage,
    W: Write,
    R: BufRead,
{
    for line in input.lines() {
        let line = line?;
        let events = match parse_line(panel.mode(), &line) {
            Command::Quit => break,
            Command::Events(events) => events,
        };
        for event in events {
            if let Err(e) = panel.handle(ui, event) {
                warn!(error = %e, ?event, "event dropped");
            }
        }
    }
    panel.close(ui);
    Ok(())
}
