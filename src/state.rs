use std::path::PathBuf;
use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::filter::{Selection, filter_with_indices, sort_for_display};
use crate::data::metrics::{MetricSummary, compute_metrics};
use crate::data::model::{Dataset, Record};
use crate::data::pivot::{PivotTable, pivot};

// ---------------------------------------------------------------------------
// Derived view
// ---------------------------------------------------------------------------

/// Everything the panels draw, recomputed from scratch on each selection
/// change.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    /// Indices into `Dataset::records`, sorted by clinic then year.
    pub rows: Vec<usize>,
    pub pivot: PivotTable,
    pub metrics: Vec<MetricSummary>,
}

impl DashboardView {
    pub fn compute(dataset: &Dataset, selection: &Selection) -> Self {
        let (mut rows, filtered): (Vec<usize>, Vec<&Record>) =
            filter_with_indices(&dataset.records, selection).into_iter().unzip();
        let pivot = pivot(&filtered);
        let metrics = if filtered.is_empty() {
            Vec::new()
        } else {
            compute_metrics(
                &pivot,
                &selection.clinics,
                selection.from_year(),
                selection.to_year(),
            )
        };

        sort_for_display(dataset, &mut rows);

        log::debug!(
            "Selection {:?}: {} rows, {} years, {} metrics",
            selection.year_range,
            rows.len(),
            pivot.len(),
            metrics.len()
        );

        DashboardView { rows, pivot, metrics }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub dataset: Arc<Dataset>,
    /// Where the dataset was read from, for the status bar.
    pub source: Option<PathBuf>,
    pub selection: Selection,
    pub view: DashboardView,
    /// Clinic colours, assigned once from the full clinic list.
    pub color_map: ColorMap,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, source: Option<PathBuf>) -> Self {
        let selection = Selection::all(&dataset);
        let view = DashboardView::compute(&dataset, &selection);
        let color_map = ColorMap::new(dataset.clinics());
        Self {
            dataset,
            source,
            selection,
            view,
            color_map,
        }
    }

    /// Recompute the derived view after the selection changed.
    pub fn refresh(&mut self) {
        self.view = DashboardView::compute(&self.dataset, &self.selection);
    }

    pub fn set_year_range(&mut self, from: i64, to: i64) {
        let range = (from.min(to), from.max(to));
        if range != self.selection.year_range {
            self.selection.year_range = range;
            self.refresh();
        }
    }

    /// Toggle a single clinic in the selection.
    pub fn toggle_clinic(&mut self, clinic: &str) {
        if !self.selection.clinics.remove(clinic) {
            self.selection.clinics.insert(clinic.to_string());
        }
        self.refresh();
    }

    pub fn select_all(&mut self) {
        self.selection.clinics = self.dataset.clinics().clone();
        self.refresh();
    }

    pub fn select_none(&mut self) {
        self.selection.clinics.clear();
        self.refresh();
    }

    /// Rows of the raw-data table, in display order.
    pub fn visible_records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.view.rows.iter().map(|&i| &self.dataset.records[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let dataset = Dataset::from_records(vec![
            Record::new(Some(1846), Some(4010.0), Some(459.0), "clinic 1"),
            Record::new(Some(1841), Some(2442.0), Some(86.0), "clinic 2"),
            Record::new(Some(1841), Some(3036.0), Some(237.0), "clinic 1"),
            Record::new(Some(1846), Some(3754.0), Some(105.0), "clinic 2"),
        ]);
        AppState::new(Arc::new(dataset), None)
    }

    #[test]
    fn test_initial_view_selects_everything() {
        let s = state();
        assert_eq!(s.selection.year_range, (1841, 1846));
        assert_eq!(s.view.rows.len(), 4);
        assert_eq!(s.view.pivot.len(), 2);
        assert_eq!(s.view.metrics.len(), 2);
        assert_eq!(s.view.metrics[0].value_str(), "11.45%");
    }

    #[test]
    fn test_rows_sorted_by_clinic_then_year() {
        let s = state();
        let keys: Vec<_> = s
            .visible_records()
            .map(|r| (r.clinic.as_str(), r.year.unwrap()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("clinic 1", 1841),
                ("clinic 1", 1846),
                ("clinic 2", 1841),
                ("clinic 2", 1846),
            ]
        );
    }

    #[test]
    fn test_deselecting_all_empties_view() {
        let mut s = state();
        s.select_none();
        assert!(s.view.is_empty());
        assert!(s.view.metrics.is_empty());
        assert!(s.view.pivot.is_empty());

        s.select_all();
        assert_eq!(s.view.rows.len(), 4);
    }

    #[test]
    fn test_toggle_clinic_and_year_range() {
        let mut s = state();
        s.toggle_clinic("clinic 2");
        assert!(s.visible_records().all(|r| r.clinic == "clinic 1"));

        s.set_year_range(1900, 1901);
        assert!(s.view.is_empty());

        s.set_year_range(1846, 1841);
        assert_eq!(s.selection.year_range, (1841, 1846));
        assert_eq!(s.view.rows.len(), 2);

        s.toggle_clinic("clinic 2");
        assert_eq!(s.view.rows.len(), 4);
    }

    #[test]
    fn test_view_matches_dataset_filter_and_pivot() {
        let s = state();
        let sel = Selection {
            year_range: (1841, 1841),
            clinics: ["clinic 2".to_string()].into_iter().collect(),
        };
        let view = DashboardView::compute(&s.dataset, &sel);
        let filtered = s.dataset.filter(&sel);
        let shown: Vec<&Record> = view.rows.iter().map(|&i| &s.dataset.records[i]).collect();
        assert_eq!(shown, filtered);
        assert_eq!(view.pivot, pivot(&filtered));
        assert_eq!(view.pivot.get(1841, "clinic 2"), filtered[0].mortality_rate);
    }

    #[test]
    fn test_boundary_year_missing_for_one_clinic() {
        let dataset = Dataset::from_records(vec![
            Record::new(Some(1841), Some(100.0), Some(4.0), "A"),
            Record::new(Some(1841), Some(100.0), Some(4.0), "B"),
            Record::new(Some(1842), Some(100.0), Some(2.0), "B"),
        ]);
        let s = AppState::new(Arc::new(dataset), None);
        let a = &s.view.metrics[0];
        let b = &s.view.metrics[1];
        assert_eq!(a.value_str(), "n/a");
        assert_eq!(b.value_str(), "2.00%");
        assert_eq!(b.delta_str(), "-50.0%");
    }
}
