use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Mortality rate over time
// ---------------------------------------------------------------------------

/// One line per clinic, drawn straight from the pivot table. Years without a
/// defined rate leave a gap in the line.
pub fn mortality_plot(ui: &mut Ui, state: &AppState) {
    let pivot = &state.view.pivot;

    Plot::new("mortality_plot")
        .legend(Legend::default())
        .height(320.0)
        .x_axis_label("Year")
        .y_axis_label("Mortality rate (%)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for clinic in pivot.clinics() {
                let color = state.color_map.color_for(clinic);

                for segment in pivot.series(clinic) {
                    // A lone year would be an invisible line; mark it instead.
                    if segment.len() == 1 {
                        plot_ui.points(
                            Points::new(PlotPoints::from(segment))
                                .name(clinic)
                                .color(color)
                                .radius(3.0),
                        );
                        continue;
                    }
                    let line = Line::new(PlotPoints::from(segment))
                        .name(clinic)
                        .color(color)
                        .width(1.5);
                    plot_ui.line(line);
                }
            }
        });
}
