use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use super::model::{Dataset, Record};
use crate::config::DashboardConfig;
use crate::error::{LoadError, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Resolve the data file from the configured lookup locations and load it
/// through the process-wide cache. Returns the path that was used.
pub fn load_dataset(config: &DashboardConfig) -> Result<(PathBuf, Arc<Dataset>)> {
    let (primary, fallback) = config.lookup_paths();
    let path = resolve_data_path(primary, fallback)?;
    log::info!("Using clinic data at {}", path.display());
    let dataset = load_cached(&path)?;
    Ok((path, dataset))
}

/// First existing path wins.
pub fn resolve_data_path(primary: PathBuf, fallback: PathBuf) -> Result<PathBuf> {
    if primary.is_file() {
        return Ok(primary);
    }
    if fallback.is_file() {
        return Ok(fallback);
    }
    Err(LoadError::ResourceNotFound { primary, fallback })
}

// ---------------------------------------------------------------------------
// Process-wide cache
// ---------------------------------------------------------------------------

/// Datasets keyed by the path they were read from. There is no invalidation:
/// the file is assumed not to change while the process runs.
static DATASET_CACHE: OnceLock<Mutex<HashMap<PathBuf, Arc<Dataset>>>> = OnceLock::new();

/// Load `path` once per process; later calls return the same `Arc`.
pub fn load_cached(path: &Path) -> Result<Arc<Dataset>> {
    let cache = DATASET_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut cache = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(dataset) = cache.get(path) {
        log::debug!("Dataset cache hit for {}", path.display());
        return Ok(Arc::clone(dataset));
    }

    log::debug!("Dataset cache miss for {}", path.display());
    let dataset = Arc::new(load_csv(path)?);
    cache.insert(path.to_path_buf(), Arc::clone(&dataset));
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Positions of the four required columns in the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    year: usize,
    births: usize,
    deaths: usize,
    clinic: usize,
}

impl ColumnIndex {
    /// Header names are matched case-exactly. `Births` wins over its alias
    /// `Birth` when both are present; otherwise the first match is used.
    fn locate(headers: &csv::StringRecord, path: &Path) -> Result<Self> {
        let find = |names: &[&str], column: &'static str| {
            names
                .iter()
                .find_map(|name| headers.iter().position(|h| h == *name))
                .ok_or_else(|| LoadError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                })
        };
        Ok(ColumnIndex {
            year: find(&["Year"], "Year")?,
            births: find(&["Births", "Birth"], "Births")?,
            deaths: find(&["Deaths"], "Deaths")?,
            clinic: find(&["Clinic"], "Clinic")?,
        })
    }
}

/// Read a clinic CSV. Rows are read flexibly: a cell that is absent, empty
/// or not a number becomes a missing value and the row is kept.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let csv_err = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();
    let columns = ColumnIndex::locate(&headers, path)?;

    let mut records = Vec::new();
    let mut malformed = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let row = result.map_err(csv_err)?;
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let (raw_year, raw_births, raw_deaths) =
            (cell(columns.year), cell(columns.births), cell(columns.deaths));
        let year = parse_year(raw_year);
        let births = parse_number(raw_births);
        let deaths = parse_number(raw_deaths);

        let bad = [
            is_malformed(raw_year, year.is_some()),
            is_malformed(raw_births, births.is_some()),
            is_malformed(raw_deaths, deaths.is_some()),
        ]
        .into_iter()
        .filter(|bad| *bad)
        .count();
        if bad > 0 {
            log::debug!("CSV row {row_no}: {bad} cell(s) treated as missing");
        }
        malformed += bad;

        records.push(Record::new(year, births, deaths, cell(columns.clinic)));
    }

    if malformed > 0 {
        log::warn!(
            "{malformed} non-numeric cell(s) in {} treated as missing",
            path.display()
        );
    }
    log::info!("Loaded {} clinic records from {}", records.len(), path.display());

    Ok(Dataset::from_records(records))
}

fn is_malformed(raw: &str, parsed: bool) -> bool {
    !parsed && !raw.trim().is_empty()
}

/// Integer years; whole-valued floats such as `1841.0` are accepted.
fn parse_year(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(y) = s.parse::<i64>() {
        return Some(y);
    }
    let f = s.parse::<f64>().ok()?;
    // `i64::MAX as f64` rounds up to 2^63, hence the strict upper bound.
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (in_range && f.fract() == 0.0).then_some(f as i64)
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}
