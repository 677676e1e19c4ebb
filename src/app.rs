use eframe::egui::{self, ScrollArea, Ui};

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{metrics, panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub enum Screen {
    Dashboard(AppState),
    /// Startup failed; only the error is shown.
    LoadFailed(String),
}

pub struct HandwashApp {
    pub config: DashboardConfig,
    pub screen: Screen,
}

impl HandwashApp {
    pub fn new(config: DashboardConfig, screen: Screen) -> Self {
        Self { config, screen }
    }
}

impl eframe::App for HandwashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = match &mut self.screen {
            Screen::Dashboard(state) => state,
            Screen::LoadFailed(message) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    panels::load_error(ui, message);
                });
                return;
            }
        };

        // ---- Top panel: status line ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, state);
        });

        // ---- Left side panel: selection ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, state);
            });

        // ---- Central panel: chart, metrics, raw data ----
        let metric_columns = self.config.metric_columns;
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| dashboard(ui, state, metric_columns));
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState, metric_columns: usize) {
    ui.heading("Handwashing & Childbed Fever — Clinic Mortality Explorer");
    ui.label("This dashboard explores clinic birth/death data (mortality rates) over time.");
    ui.add_space(8.0);

    if state.selection.clinics.is_empty() {
        panels::warning(ui, "Select at least one clinic to view the charts.");
    }

    ui.heading("Mortality rate over time");

    if state.view.is_empty() {
        panels::info(ui, "No data available for the selected clinics / years.");
        return;
    }

    plot::mortality_plot(ui, state);
    ui.add_space(8.0);

    ui.heading(format!(
        "Metrics: {} → {}",
        state.selection.from_year(),
        state.selection.to_year()
    ));
    metrics::metric_cards(ui, &state.view.metrics, metric_columns);
    ui.add_space(8.0);

    ui.heading("Raw data");
    table::raw_data_table(ui, state);
}
