use anyhow::Context;
use eframe::egui;

use handwash_explorer::app::{HandwashApp, Screen};
use handwash_explorer::config::DashboardConfig;
use handwash_explorer::data::loader;
use handwash_explorer::state::AppState;

/// Load the dataset before the window opens; a failure replaces the whole
/// dashboard with the error.
fn startup_screen(config: &DashboardConfig) -> Screen {
    let loaded = loader::load_dataset(config).context("loading clinic dataset");
    match loaded {
        Ok((path, dataset)) => Screen::Dashboard(AppState::new(dataset, Some(path))),
        Err(e) => {
            log::error!("{e:#}");
            Screen::LoadFailed(format!("{e:#}"))
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::default();
    let screen = startup_screen(&config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(HandwashApp::new(config, screen)))),
    )
}
