/// Data layer: core types, loading, filtering, reshaping, and metrics.
///
/// Architecture:
/// ```text
///  data/handwashing.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset (cached per path)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year range + clinic set → Vec<&Record>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  pivot    │  Year × Clinic → mortality rate
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  metrics  │  first/last year → value + delta per clinic
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod pivot;
