//! Command-line argument parsing

use std::path::PathBuf;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub root: Option<String>,
    pub config: Option<PathBuf>,
    /// Treat ROOT as unmounted unless it is a separate device
    pub require_mount: bool,
}

pub fn parse_args() -> Args {
    parse(std::env::args().skip(1))
}

fn parse(args: impl IntoIterator<Item = String>) -> Args {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => parsed.config = args.next().map(PathBuf::from),
            "-m" | "--require-mount" => parsed.require_mount = true,
            "-h" | "--help" => print_help(),
            _ => parsed.root = Some(arg),
        }
    }

    parsed
}

fn print_help() -> ! {
    eprintln!("Usage: pstnav [OPTIONS] [ROOT]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config FILE  Read settings from a TOML file");
    eprintln!("  -m, --require-mount");
    eprintln!("                     Show ROOT as not mounted unless a volume is mounted there");
    eprintln!("  -h, --help         Show this help message");
    eprintln!();
    eprintln!("While browsing:");
    eprintln!("  N                  Tap entry N");
    eprintln!("  b                  Tap the Back button");
    eprintln!("  /                  Tap the header (search)");
    eprintln!("  q                  Quit");
    eprintln!();
    eprintln!("While the keyboard is up:");
    eprintln!("  TEXT               Type TEXT");
    eprintln!("  ENTER | BS | SPACE | CANCEL");
    eprintln!("  !                  Tap outside the keyboard");
    eprintln!();
    eprintln!("Set RUST_LOG to control log output (default: pstnav=info).");
    std::process::exit(0);
}
