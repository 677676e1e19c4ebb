use std::path::{Path, PathBuf};

/// Static dashboard settings. Logging verbosity comes from `RUST_LOG`.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Data file location, relative to each lookup root.
    pub data_relative_path: PathBuf,
    /// Metric cards per row.
    pub metric_columns: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Handwashing dashboard".to_string(),
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
            data_relative_path: Path::new("data").join("handwashing.csv"),
            metric_columns: 4,
        }
    }
}

impl DashboardConfig {
    /// The two lookup locations in priority order: next to the executable,
    /// then under the current working directory.
    pub fn lookup_paths(&self) -> (PathBuf, PathBuf) {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        let cwd = std::env::current_dir().unwrap_or_default();
        self.lookup_paths_from(&exe_dir, &cwd)
    }

    pub fn lookup_paths_from(&self, install_dir: &Path, cwd: &Path) -> (PathBuf, PathBuf) {
        (
            install_dir.join(&self.data_relative_path),
            cwd.join(&self.data_relative_path),
        )
    }
}
