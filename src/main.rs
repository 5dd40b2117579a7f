use anyhow::Result;

use tapedeck::{config, logging, ui};

fn main() -> Result<()> {
    // Logging is best-effort; the player works without it.
    if let Err(e) = logging::init(&config::config_dir()) {
        eprintln!("tapedeck: logging disabled: {e:#}");
    }
    log::info!("starting tapedeck {}", env!("CARGO_PKG_VERSION"));

    ui::run()
}
