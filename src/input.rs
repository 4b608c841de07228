//! Discrete user events and how each mode interprets them

/// A key on the on-screen keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Space,
    Backspace,
    Enter,
    Cancel,
}

/// What the toolkit reports after hit-testing a touch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    EntryTapped(usize),
    /// The fixed Back button above the list
    BackTapped,
    /// The header label; opens the search keyboard
    HeaderTapped,
    KeyTapped(Key),
    /// The dimmed area around the keyboard
    BackdropTapped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    Typing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Select(usize),
    NavigateUp,
    StartSearch,
    Press(Key),
    Dismiss,
}

fn handle_browsing_event(event: Event) -> Action {
    match event {
        Event::EntryTapped(index) => Action::Select(index),
        Event::BackTapped => Action::NavigateUp,
        Event::HeaderTapped => Action::StartSearch,
        Event::KeyTapped(_) | Event::BackdropTapped => Action::None,
    }
}

// The keyboard is modal: nothing behind it reacts while it is up.
fn handle_typing_event(event: Event) -> Action {
    match event {
        Event::KeyTapped(key) => Action::Press(key),
        Event::BackdropTapped => Action::Dismiss,
        _ => Action::None,
    }
}

pub fn handle_event(mode: Mode, event: Event) -> Action {
    match mode {
        Mode::Browsing => handle_browsing_event(event),
        Mode::Typing => handle_typing_event(event),
    }
}

/// Parse a key token: a single printable character, a control character
/// (`\n`, `\u{8}`, `\u{1b}`), or a key name such as `ENTER`.
pub fn parse_key(token: &str) -> Option<Key> {
    match token {
        "\n" | "\r" => return Some(Key::Enter),
        "\u{8}" | "\u{7f}" => return Some(Key::Backspace),
        "\u{1b}" => return Some(Key::Cancel),
        " " => return Some(Key::Space),
        _ => {}
    }

    match token.to_ascii_uppercase().as_str() {
        "ENTER" | "SUBMIT" => return Some(Key::Enter),
        "BACKSPACE" | "BS" => return Some(Key::Backspace),
        "CANCEL" | "ESC" => return Some(Key::Cancel),
        "SPACE" => return Some(Key::Space),
        _ => {}
    }

    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() => Some(Key::Char(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default() {
        assert_eq!(Mode::default(), Mode::Browsing);
    }

    #[test]
    fn test_browsing_events() {
        assert_eq!(
            handle_event(Mode::Browsing, Event::EntryTapped(3)),
            Action::Select(3)
        );
        assert_eq!(
            handle_event(Mode::Browsing, Event::BackTapped),
            Action::NavigateUp
        );
        assert_eq!(
            handle_event(Mode::Browsing, Event::HeaderTapped),
            Action::StartSearch
        );
        assert_eq!(
            handle_event(Mode::Browsing, Event::KeyTapped(Key::Enter)),
            Action::None
        );
    }

    #[test]
    fn test_typing_is_modal() {
        assert_eq!(
            handle_event(Mode::Typing, Event::EntryTapped(0)),
            Action::None
        );
        assert_eq!(handle_event(Mode::Typing, Event::HeaderTapped), Action::None);
        assert_eq!(
            handle_event(Mode::Typing, Event::KeyTapped(Key::Char('a'))),
            Action::Press(Key::Char('a'))
        );
        assert_eq!(
            handle_event(Mode::Typing, Event::BackdropTapped),
            Action::Dismiss
        );
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("a"), Some(Key::Char('a')));
        assert_eq!(parse_key("é"), Some(Key::Char('é')));
        assert_eq!(parse_key(" "), Some(Key::Space));
        assert_eq!(parse_key("\n"), Some(Key::Enter));
        assert_eq!(parse_key("enter"), Some(Key::Enter));
        assert_eq!(parse_key("\u{8}"), Some(Key::Backspace));
        assert_eq!(parse_key("BACKSPACE"), Some(Key::Backspace));
        assert_eq!(parse_key("\u{1b}"), Some(Key::Cancel));
        assert_eq!(parse_key("Space"), Some(Key::Space));
        assert_eq!(parse_key("ab"), None);
        assert_eq!(parse_key("\t"), None);
        assert_eq!(parse_key(""), None);
    }
}
