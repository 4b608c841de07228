mod cli;
mod console;
mod logging;

use std::io;
use std::path::{self, PathBuf};

use tracing::{info, warn};

use cli::{Args, parse_args};
use console::ConsoleSurface;
use logging::init_logging;
use pstnav::config::Config;
use pstnav::filesystem::LocalStorage;
use pstnav::{Panel, Settings};

async fn load_settings(args: &Args) -> Settings {
    if let Some(path) = &args.config {
        let loaded = std::fs::read_to_string(path)
            .map_err(pstnav::Error::from)
            .and_then(|source| Settings::from_toml_str(&source));
        return loaded.unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "failed to read config, using defaults");
            Settings::default()
        });
    }

    match Config::load().await {
        Ok(config) => config.settings().await,
        Err(e) => {
            info!(error = %e, "no config found, using defaults");
            Settings::default()
        }
    }
}

/// The configured root made absolute against the working directory, or
/// the home directory when it isn't there (a desktop has no card at `/sd`).
fn resolve_root(requested: &str) -> String {
    let absolute = path::absolute(requested).unwrap_or_else(|_| PathBuf::from(requested));
    if absolute.is_dir() {
        return absolute.to_string_lossy().into_owned();
    }
    let fallback = dirs::home_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "/".to_string());
    warn!(requested, fallback = %fallback, "root is not a directory");
    fallback
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = parse_args();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let settings = rt.block_on(load_settings(&args));

    let requested = args.root.clone().unwrap_or_else(|| settings.root.clone());
    let root = resolve_root(&requested);

    let storage = LocalStorage::new(&root).with_device_check(args.require_mount);
    info!(
        mount_point = %storage.mount_point().display(),
        device_check = args.require_mount,
        "using local storage"
    );
    let mut panel = Panel::new(storage, &settings);
    let mut ui = ConsoleSurface::new(io::stdout());

    panel.open(&mut ui, &root, |path| println!("selected: {path}"))?;
    console::run(&mut panel, &mut ui, io::stdin().lock())?;

    Ok(())
}
