use std::collections::{BTreeMap, BTreeSet};

use super::model::Record;

/// Mortality rate reshaped to Year (rows) × Clinic (columns).
///
/// Sparse: a (year, clinic) pair with no record has no cell at all. A cell
/// whose record has an undefined rate is stored as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotTable {
    rows: BTreeMap<i64, BTreeMap<String, Option<f64>>>,
    clinics: BTreeSet<String>,
}

impl PivotTable {
    /// Group rows by (year, clinic). Duplicate pairs resolve last-write-wins
    /// in input order. Rows without a year are skipped.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut table = PivotTable::default();
        for record in records {
            let Some(year) = record.year else {
                continue;
            };
            table.clinics.insert(record.clinic.clone());
            table
                .rows
                .entry(year)
                .or_default()
                .insert(record.clinic.clone(), record.mortality_rate);
        }
        table
    }

    /// Exact (year, clinic) lookup. Absent and undefined cells both give `None`.
    pub fn get(&self, year: i64, clinic: &str) -> Option<f64> {
        self.rows.get(&year)?.get(clinic).copied().flatten()
    }

    /// Whether a cell exists for the pair, even with an undefined rate.
    pub fn contains(&self, year: i64, clinic: &str) -> bool {
        self.rows.get(&year).is_some_and(|row| row.contains_key(clinic))
    }

    /// Years present, ascending.
    pub fn years(&self) -> impl Iterator<Item = i64> + '_ {
        self.rows.keys().copied()
    }

    /// Clinics present, sorted.
    pub fn clinics(&self) -> &BTreeSet<String> {
        &self.clinics
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of year rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Plot points for one clinic as contiguous `[year, rate]` runs. A year
    /// row lacking a defined value for the clinic ends the current run.
    pub fn series(&self, clinic: &str) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();
        for (&year, row) in &self.rows {
            match row.get(clinic).copied().flatten() {
                Some(rate) => current.push([year as f64, rate]),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

pub fn pivot(records: &[&Record]) -> PivotTable {
    PivotTable::from_records(records.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(year: i64, births: f64, deaths: f64, clinic: &str) -> Record {
        Record::new(Some(year), Some(births), Some(deaths), clinic)
    }

    #[test]
    fn test_every_input_pair_becomes_one_cell() {
        let records = vec![
            rec(1841, 3036.0, 237.0, "Clinic A"),
            rec(1846, 4010.0, 459.0, "Clinic A"),
            rec(1841, 2442.0, 86.0, "Clinic B"),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let table = pivot(&refs);

        assert_eq!(table.len(), 2);
        assert_eq!(table.years().collect::<Vec<_>>(), vec![1841, 1846]);
        assert_eq!(table.clinics().len(), 2);
        for r in &records {
            assert_eq!(table.get(r.year.unwrap(), &r.clinic), r.mortality_rate);
        }
    }

    #[test]
    fn test_missing_pairs_are_absent_not_zero() {
        let records = vec![rec(1841, 100.0, 5.0, "A"), rec(1842, 100.0, 6.0, "B")];
        let refs: Vec<&Record> = records.iter().collect();
        let table = pivot(&refs);
        assert!(!table.contains(1842, "A"));
        assert_eq!(table.get(1842, "A"), None);
        assert_eq!(table.get(1900, "A"), None);
        assert_eq!(table.get(1841, "nobody"), None);
    }

    #[test]
    fn test_duplicates_last_write_wins() {
        let records = vec![
            rec(1841, 100.0, 5.0, "A"),
            rec(1841, 100.0, 9.0, "A"),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        assert_eq!(pivot(&refs).get(1841, "A"), Some(9.0));
    }

    #[test]
    fn test_undefined_rate_kept_as_present_cell() {
        let records = vec![rec(1841, 0.0, 0.0, "A")];
        let refs: Vec<&Record> = records.iter().collect();
        let table = pivot(&refs);
        assert!(table.contains(1841, "A"));
        assert_eq!(table.get(1841, "A"), None);
    }

    #[test]
    fn test_pivot_is_reshape_stable() {
        let records = vec![
            rec(1843, 100.0, 5.0, "B"),
            rec(1841, 100.0, 7.0, "A"),
            rec(1842, 100.0, 6.0, "A"),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        assert_eq!(pivot(&refs), pivot(&refs));
    }

    #[test]
    fn test_series_splits_at_gaps() {
        let records = vec![
            rec(1841, 100.0, 1.0, "A"),
            rec(1842, 100.0, 2.0, "A"),
            rec(1843, 100.0, 3.0, "B"),
            rec(1844, 100.0, 4.0, "A"),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let segments = pivot(&refs).series("A");
        assert_eq!(
            segments,
            vec![
                vec![[1841.0, 1.0], [1842.0, 2.0]],
                vec![[1844.0, 4.0]],
            ]
        );
    }
}
