use std::collections::BTreeSet;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Selection: what the user currently wants to see
// ---------------------------------------------------------------------------

/// Year interval (inclusive) plus the set of selected clinics.
///
/// `from <= to` is guaranteed by the range control, not checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub year_range: (i64, i64),
    pub clinics: BTreeSet<String>,
}

impl Selection {
    /// Everything selected: full year span, every clinic.
    pub fn all(dataset: &Dataset) -> Self {
        Selection {
            year_range: dataset.year_bounds().unwrap_or((0, 0)),
            clinics: dataset.clinics().clone(),
        }
    }

    pub fn from_year(&self) -> i64 {
        self.year_range.0
    }

    pub fn to_year(&self) -> i64 {
        self.year_range.1
    }

    /// Whether a single record passes both the clinic and the year predicate.
    /// Records without a valid year never match.
    pub fn matches(&self, record: &Record) -> bool {
        let (from, to) = self.year_range;
        self.clinics.contains(&record.clinic)
            && record.year.is_some_and(|y| from <= y && y <= to)
    }
}

/// Keep the records passing `selection`, paired with their position in
/// `records`. Input order is preserved; an empty clinic set yields nothing.
pub fn filter_with_indices<'a, I>(records: I, selection: &Selection) -> Vec<(usize, &'a Record)>
where
    I: IntoIterator<Item = &'a Record>,
{
    if selection.clinics.is_empty() {
        return Vec::new();
    }
    records
        .into_iter()
        .enumerate()
        .filter(|(_, r)| selection.matches(r))
        .collect()
}

/// Keep the records passing `selection`, preserving input order.
pub fn filter_records<'a, I>(records: I, selection: &Selection) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    filter_with_indices(records, selection)
        .into_iter()
        .map(|(_, r)| r)
        .collect()
}

impl Dataset {
    pub fn filter(&self, selection: &Selection) -> Vec<&Record> {
        filter_records(&self.records, selection)
    }
}

/// Raw-table ordering: by clinic, then year. Stable, so ties keep file order.
pub fn sort_for_display(dataset: &Dataset, indices: &mut [usize]) {
    indices.sort_by(|&a, &b| {
        let (a, b) = (&dataset.records[a], &dataset.records[b]);
        a.clinic.cmp(&b.clinic).then(a.year.cmp(&b.year))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            Record::new(Some(1841), Some(3036.0), Some(237.0), "clinic 1"),
            Record::new(Some(1841), Some(2442.0), Some(86.0), "clinic 2"),
            Record::new(Some(1842), Some(3287.0), Some(518.0), "clinic 1"),
            Record::new(None, Some(100.0), Some(1.0), "clinic 1"),
            Record::new(Some(1849), Some(2659.0), Some(202.0), "clinic 2"),
        ])
    }

    fn selection(from: i64, to: i64, clinics: &[&str]) -> Selection {
        Selection {
            year_range: (from, to),
            clinics: clinics.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_filter_by_clinic_and_inclusive_range() {
        let ds = dataset();
        let rows = ds.filter(&selection(1841, 1842, &["clinic 1"]));
        let years: Vec<_> = rows.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![Some(1841), Some(1842)]);
        assert!(rows.iter().all(|r| r.clinic == "clinic 1"));
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let ds = dataset();
        let rows = ds.filter(&Selection::all(&ds));
        let clinics: Vec<_> = rows.iter().map(|r| (r.clinic.as_str(), r.year)).collect();
        assert_eq!(
            clinics,
            vec![
                ("clinic 1", Some(1841)),
                ("clinic 2", Some(1841)),
                ("clinic 1", Some(1842)),
                ("clinic 2", Some(1849)),
            ]
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let ds = dataset();
        let sel = selection(1841, 1845, &["clinic 1", "clinic 2"]);
        let once = ds.filter(&sel);
        let twice = filter_records(once.iter().copied(), &sel);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_clinic_set_yields_nothing() {
        let ds = dataset();
        for (from, to) in [(0, 3000), (1841, 1841), (1900, 1901)] {
            assert!(ds.filter(&selection(from, to, &[])).is_empty());
        }
    }

    #[test]
    fn test_range_outside_data_is_empty_not_error() {
        let ds = dataset();
        assert!(ds.filter(&selection(1900, 1901, &["clinic 1", "clinic 2"])).is_empty());
    }

    #[test]
    fn test_selection_all_covers_dataset() {
        let ds = dataset();
        let sel = Selection::all(&ds);
        assert_eq!(sel.year_range, (1841, 1849));
        assert_eq!(sel.clinics.len(), 2);
        // The year-less row is the only one left out.
        assert_eq!(ds.filter(&sel).len(), 4);
    }

    #[test]
    fn test_filter_with_indices_points_back_into_input() {
        let ds = dataset();
        let sel = selection(1841, 1849, &["clinic 2"]);
        let matched = filter_with_indices(&ds.records, &sel);
        let indices: Vec<usize> = matched.iter().map(|&(i, _)| i).collect();
        assert_eq!(indices, vec![1, 4]);
        for (i, r) in &matched {
            assert_eq!(&ds.records[*i], *r);
        }
        assert!(filter_with_indices(&ds.records, &selection(1841, 1849, &[])).is_empty());
    }

    #[test]
    fn test_sort_for_display_orders_by_clinic_then_year() {
        let ds = dataset();
        let mut indices: Vec<usize> = filter_with_indices(&ds.records, &Selection::all(&ds))
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        sort_for_display(&ds, &mut indices);
        let keys: Vec<_> = indices
            .iter()
            .map(|&i| (ds.records[i].clinic.as_str(), ds.records[i].year))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("clinic 1", Some(1841)),
                ("clinic 1", Some(1842)),
                ("clinic 2", Some(1841)),
                ("clinic 2", Some(1849)),
            ]
        );
    }
}
