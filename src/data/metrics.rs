use std::fmt;

use super::pivot::PivotTable;

/// Shown in place of a value that cannot be computed.
pub const NOT_AVAILABLE: &str = "n/a";

/// Change between the first and last year of the selected range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Delta {
    /// `last - first`, used when the baseline is exactly zero.
    PercentagePoints(f64),
    /// `(last - first) / first * 100`.
    Relative(f64),
}

impl Delta {
    pub fn between(first: f64, last: f64) -> Self {
        if first == 0.0 {
            Delta::PercentagePoints(last - first)
        } else {
            Delta::Relative((last - first) / first * 100.0)
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            Delta::PercentagePoints(v) | Delta::Relative(v) => v,
        }
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delta::PercentagePoints(v) => write!(f, "{v:.2}pp"),
            Delta::Relative(v) => write!(f, "{v:+.1}%"),
        }
    }
}

/// How a metric card should colour its delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaKind {
    Normal,
    /// No delta available; rendered neutral.
    Off,
}

/// Summary card contents for one clinic.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummary {
    pub clinic: String,
    pub latest: Option<f64>,
    pub delta: Option<Delta>,
}

impl MetricSummary {
    pub fn label(&self) -> String {
        format!("{} mortality", self.clinic)
    }

    pub fn value_str(&self) -> String {
        match self.latest {
            Some(v) => format!("{v:.2}%"),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn delta_str(&self) -> String {
        match self.delta {
            Some(d) => d.to_string(),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn delta_kind(&self) -> DeltaKind {
        if self.delta.is_some() {
            DeltaKind::Normal
        } else {
            DeltaKind::Off
        }
    }
}

/// Compare the clinic's rate at exactly `from_year` and `to_year`.
/// There is no nearest-year fallback.
pub fn compute_metric(pivot: &PivotTable, clinic: &str, from_year: i64, to_year: i64) -> MetricSummary {
    let first = pivot.get(from_year, clinic);
    let last = pivot.get(to_year, clinic);

    let delta = match (first, last) {
        (Some(first), Some(last)) => Some(Delta::between(first, last)),
        _ => None,
    };

    MetricSummary {
        clinic: clinic.to_string(),
        latest: last,
        delta,
    }
}

/// One summary per clinic, in the order given.
pub fn compute_metrics<'a, I>(pivot: &PivotTable, clinics: I, from_year: i64, to_year: i64) -> Vec<MetricSummary>
where
    I: IntoIterator<Item = &'a String>,
{
    clinics
        .into_iter()
        .map(|clinic| compute_metric(pivot, clinic, from_year, to_year))
        .collect()
}
