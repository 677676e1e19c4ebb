use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Record – one row of the clinic CSV
// ---------------------------------------------------------------------------

/// One yearly per-clinic row.
///
/// Numeric columns are `Option` because malformed cells are coerced to
/// "missing" at load time instead of aborting the load.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub year: Option<i64>,
    pub births: Option<f64>,
    pub deaths: Option<f64>,
    pub clinic: String,
    /// Deaths per 100 births. `None` when births is zero or either count is missing.
    pub mortality_rate: Option<f64>,
}

impl Record {
    /// Build a record and derive its mortality rate.
    pub fn new(year: Option<i64>, births: Option<f64>, deaths: Option<f64>, clinic: impl Into<String>) -> Self {
        Record {
            year,
            births,
            deaths,
            clinic: clinic.into(),
            mortality_rate: mortality_rate(births, deaths),
        }
    }
}

/// `deaths / births * 100`, with absence propagated explicitly.
pub fn mortality_rate(births: Option<f64>, deaths: Option<f64>) -> Option<f64> {
    let births = births?;
    let deaths = deaths?;
    if births == 0.0 {
        return None;
    }
    Some(deaths / births * 100.0)
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded CSV
// ---------------------------------------------------------------------------

/// All loaded records, in file order. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// Sorted distinct non-empty clinic labels.
    clinics: BTreeSet<String>,
}

impl Dataset {
    /// Build the clinic index from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let clinics = records
            .iter()
            .filter(|r| !r.clinic.is_empty())
            .map(|r| r.clinic.clone())
            .collect();
        Dataset { records, clinics }
    }

    /// Clinic labels offered as filter options, sorted.
    pub fn clinics(&self) -> &BTreeSet<String> {
        &self.clinics
    }

    /// Smallest and largest valid year, or `None` when no row has one.
    pub fn year_bounds(&self) -> Option<(i64, i64)> {
        let mut years = self.records.iter().filter_map(|r| r.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
