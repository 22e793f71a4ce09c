//! Othello GUI
//!
//! A graphical interface for playing Othello against the minimax engine or
//! another player. Reads `othello.toml` from the working directory if present.

use std::path::Path;

use othello::ui::OthelloApp;
use othello::AppConfig;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = match AppConfig::load_or_default(Path::new("othello.toml")) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; using defaults", e);
            AppConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Othello"),
        ..Default::default()
    };

    eframe::run_native(
        "Othello",
        options,
        Box::new(move |cc| Ok(Box::new(OthelloApp::new(cc, config)))),
    )
}
