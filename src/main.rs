// forecast-menu: a watch-style forecast menu in the terminal.
// Sets up logging and config, then hands the terminal to the app's event loop.

mod app;
mod config;
mod error;
mod state;
mod ui;

use std::fs::{self, OpenOptions};

use log::info;

use crate::app::App;
use crate::config::Config;
use crate::error::Result;

/// Send logs to a file in the cache directory. Logging stays off if the file can't be opened.
fn init_logging(config: &Config) {
    let Some(path) = config::log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .parse_env("RUST_LOG")
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn main() -> Result<()> {
    let config = config::load_or_default()?;
    init_logging(&config);
    info!("starting with {:?}", config);

    if let Some(path) = config::config_path() {
        if !path.exists() {
            info!("no config at {}, using defaults", path.display());
        }
    }

    let mut terminal = ratatui::init();
    let mut app = App::new(&config);
    let result = app.run(&mut terminal);
    ratatui::restore();

    result?;
    Ok(())
}
