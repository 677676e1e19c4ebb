use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::Record;
use crate::state::AppState;

const HEADERS: [&str; 5] = ["Year", "Births", "Deaths", "Clinic", "MortalityRate"];

/// Filtered rows, sorted by clinic then year. Missing values are blank.
pub fn raw_data_table(ui: &mut Ui, state: &AppState) {
    let rows: Vec<&Record> = state.visible_records().collect();

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_least(70.0), HEADERS.len())
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let record = rows[row.index()];
                for cell in cells(record) {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

fn cells(record: &Record) -> [String; 5] {
    [
        record.year.map(|y| y.to_string()).unwrap_or_default(),
        record.births.map(|v| v.to_string()).unwrap_or_default(),
        record.deaths.map(|v| v.to_string()).unwrap_or_default(),
        record.clinic.clone(),
        record
            .mortality_rate
            .map(|v| format!("{v:.2}"))
            .unwrap_or_default(),
    ]
}
