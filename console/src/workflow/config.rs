use anyhow::{bail, Context};
use matcore::prelude::{EntryLimits, DEFAULT_MAX_DIMENSION, DEFAULT_VALUE_LIMIT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Entry limits for manual input, loadable from YAML or built from flags.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub max_rows: usize,
    pub max_cols: usize,
    pub value_limit: f64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_DIMENSION,
            max_cols: DEFAULT_MAX_DIMENSION,
            value_limit: DEFAULT_VALUE_LIMIT,
        }
    }
}

impl ConsoleConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading limits config {}", path_ref.display()))?;
        let config: ConsoleConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing limits config {}", path_ref.display()))?;
        config.validated()
    }

    pub fn from_args(max_rows: usize, max_cols: usize, value_limit: f64) -> anyhow::Result<Self> {
        Self {
            max_rows,
            max_cols,
            value_limit,
        }
        .validated()
    }

    pub fn to_entry_limits(&self) -> EntryLimits {
        EntryLimits {
            max_rows: self.max_rows,
            max_cols: self.max_cols,
            value_limit: self.value_limit,
        }
    }

    fn validated(self) -> anyhow::Result<Self> {
        if self.max_rows == 0 || self.max_cols == 0 {
            bail!("entry limits must admit at least one row and one column");
        }
        if !self.value_limit.is_finite() || self.value_limit <= 0.0 {
            bail!("the value limit must be a positive finite number");
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_defaults_match_the_entry_contract() {
        let cfg = ConsoleConfig::default();
        assert_eq!(cfg.to_entry_limits(), EntryLimits::default());
    }

    #[test]
    fn config_from_args_produces_entry_limits() {
        let cfg = ConsoleConfig::from_args(10, 20, 500.0).unwrap();
        let limits = cfg.to_entry_limits();
        assert_eq!(limits.max_rows, 10);
        assert_eq!(limits.max_cols, 20);
        assert_eq!(limits.value_limit, 500.0);
    }

    #[test]
    fn config_rejects_empty_dimension_ranges() {
        assert!(ConsoleConfig::from_args(0, 5, 1.0).is_err());
        assert!(ConsoleConfig::from_args(5, 5, f64::NAN).is_err());
        assert!(ConsoleConfig::from_args(5, 5, -2.0).is_err());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"max_rows: 8\nmax_cols: 6\nvalue_limit: 1e6\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = ConsoleConfig::load(&path).unwrap();
        assert_eq!(cfg.max_rows, 8);
        assert_eq!(cfg.max_cols, 6);
        assert_eq!(cfg.value_limit, 1e6);
    }

    #[test]
    fn config_load_fills_missing_fields_with_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"max_rows: 3\n").unwrap();
        let path = temp.into_temp_path();
        let cfg = ConsoleConfig::load(&path).unwrap();
        assert_eq!(cfg.max_rows, 3);
        assert_eq!(cfg.max_cols, DEFAULT_MAX_DIMENSION);
        assert_eq!(cfg.value_limit, DEFAULT_VALUE_LIMIT);
    }
}
