//! Data directory layout and config loading.
//!
//! ```text
//! ~/.distplot/
//! ├── config.yaml        # grid, start distribution, initial slider values
//! ├── keybindings.yaml   # optional key overrides
//! └── distplot.log
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use distplot_core::PlotConfig;

use crate::data::keybindings_data::KeybindingsConfig;

#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Everything read from the data directory at startup
#[derive(Debug)]
pub struct LoadResult {
    pub config: PlotConfig,
    /// File the config came from, `None` when defaults were used
    pub config_source: Option<PathBuf>,
    pub keybindings: KeybindingsConfig,
    /// Set when `keybindings.yaml` exists but was ignored
    pub keybindings_warning: Option<String>,
}

/// Manages the data directory
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.distplot/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".distplot")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    /// Load the plot config.
    ///
    /// An explicit `path` must exist. Without one, a missing `config.yaml`
    /// means defaults.
    pub fn load_config(
        &self,
        path: Option<&Path>,
    ) -> Result<(PlotConfig, Option<PathBuf>), StorageError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = self.config_path();
                if !default.exists() {
                    return Ok((PlotConfig::default(), None));
                }
                default
            }
        };

        let content = fs::read_to_string(&config_path).map_err(|e| {
            StorageError::Io(format!("Failed to read {}: {}", config_path.display(), e))
        })?;
        let config = parse_config(&content)
            .map_err(|e| StorageError::Parse(format!("{}: {}", config_path.display(), e)))?;

        Ok((config, Some(config_path)))
    }

    /// Load config and keybindings
    pub fn load(&self, config_path: Option<&Path>) -> Result<LoadResult, StorageError> {
        let (config, config_source) = self.load_config(config_path)?;
        let (keybindings, keybindings_warning) = KeybindingsConfig::load_or_default(&self.root);

        Ok(LoadResult {
            config,
            config_source,
            keybindings,
            keybindings_warning,
        })
    }
}

/// Parse a YAML plot config. An empty document yields the defaults.
pub fn parse_config(content: &str) -> Result<PlotConfig, String> {
    if content.trim().is_empty() {
        return Ok(PlotConfig::default());
    }
    serde_saphyr::from_str(content).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use distplot_core::DistributionKind;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());
        let loaded = storage.load(None).unwrap();
        assert_eq!(loaded.config, PlotConfig::default());
        assert!(loaded.config_source.is_none());
        assert!(loaded.keybindings_warning.is_none());
    }

    #[test]
    fn test_config_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());
        fs::write(
            storage.config_path(),
            "start_distribution: generalized_pareto\n\
             grid:\n  points: 201\n\
             initial:\n  pareto:\n    shape: 0.0\n",
        )
        .unwrap();

        let (config, source) = storage.load_config(None).unwrap();
        assert_eq!(source, Some(storage.config_path()));
        assert_eq!(config.start_distribution, DistributionKind::Pareto);
        assert_eq!(config.grid.points, 201);
        assert_eq!(config.grid.start, -10.0);
        assert_eq!(config.initial.pareto.get("shape"), Some(&0.0));
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());
        let missing = dir.path().join("nope.yaml");
        assert!(matches!(
            storage.load_config(Some(&missing)),
            Err(StorageError::Io(_))
        ));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(parse_config("grid: [1, 2").is_err());
        assert!(parse_config("start_distribution: cauchy").is_err());
        assert_eq!(parse_config("  \n").unwrap(), PlotConfig::default());
    }

    #[test]
    fn test_malformed_keybindings_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());
        fs::write(
            KeybindingsConfig::path(storage.root()),
            "sliders:\n  reset: {",
        )
        .unwrap();

        let loaded = storage.load(None).unwrap();
        assert_eq!(loaded.keybindings.sliders.reset, vec!["r"]);
        let warning = loaded.keybindings_warning.unwrap();
        assert!(warning.contains("keybindings.yaml"), "{warning}");
    }
}
