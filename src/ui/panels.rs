use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the year-range and clinic controls.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some((min_year, max_year)) = state.dataset.year_bounds() else {
        ui.label("No rows with a valid year.");
        return;
    };

    // ---- Year range: a paired from/to control ----
    ui.strong("Which years are you interested in?");
    let (mut from, mut to) = state.selection.year_range;
    ui.add(egui::Slider::new(&mut from, min_year..=max_year).text("from"));
    ui.add(egui::Slider::new(&mut to, min_year..=max_year).text("to"));
    // Dragging one handle past the other pushes it along.
    if from > state.selection.from_year() && from > to {
        to = from;
    } else if to < state.selection.to_year() && to < from {
        from = to;
    }
    state.set_year_range(from, to);
    ui.separator();

    // ---- Clinic multiselect ----
    let clinics = state.dataset.clinics().clone();
    let header_text = format!(
        "Which clinics would you like to view?  ({}/{})",
        state.selection.clinics.len(),
        clinics.len()
    );
    ui.strong(header_text);
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for clinic in &clinics {
                let mut checked = state.selection.clinics.contains(clinic);
                let text = RichText::new(clinic).color(state.color_map.color_for(clinic));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_clinic(clinic);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the status line.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} records loaded, {} visible",
            state.dataset.len(),
            state.view.rows.len()
        ));
        if let Some(path) = &state.source {
            ui.separator();
            ui.label(RichText::new(path.display().to_string()).weak());
        }
    });
}

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

pub fn warning(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(format!("⚠ {text}")).color(Color32::from_rgb(230, 160, 30)));
}

pub fn info(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(format!("ℹ {text}")).color(Color32::LIGHT_BLUE));
}

/// Blocking message shown instead of the dashboard when loading failed.
pub fn load_error(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!("Could not load the clinic dataset:\n\n{message}"))
                .color(Color32::RED)
                .heading(),
        );
    });
}
