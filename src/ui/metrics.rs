use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::metrics::{DeltaKind, MetricSummary};

/// Summary cards, `columns` per row.
pub fn metric_cards(ui: &mut Ui, metrics: &[MetricSummary], columns: usize) {
    let columns = columns.max(1);
    for chunk in metrics.chunks(columns) {
        ui.columns(columns, |cols: &mut [Ui]| {
            for (col, metric) in cols.iter_mut().zip(chunk) {
                metric_card(col, metric);
            }
        });
        ui.add_space(6.0);
    }
}

fn metric_card(ui: &mut Ui, metric: &MetricSummary) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(metric.label()).small());
        ui.label(RichText::new(metric.value_str()).size(24.0).strong());
        ui.label(RichText::new(metric.delta_str()).color(delta_color(metric)));
    });
}

/// Green for a rise, red for a fall, grey when there is no delta.
fn delta_color(metric: &MetricSummary) -> Color32 {
    match (metric.delta_kind(), metric.delta) {
        (DeltaKind::Normal, Some(d)) if d.value() > 0.0 => Color32::from_rgb(40, 170, 80),
        (DeltaKind::Normal, Some(d)) if d.value() < 0.0 => Color32::from_rgb(220, 60, 60),
        _ => Color32::GRAY,
    }
}
