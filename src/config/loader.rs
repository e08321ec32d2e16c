//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollSettings, TaxTable};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates them before making them available to the engine.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/nigeria_paye/
/// ├── settings.yaml    # Company-wide payroll settings
/// └── tax_table.yaml   # Statutory PAYE tax table
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/nigeria_paye").unwrap();
/// println!("PAYE enabled by default: {}", loader.settings().apply_paye);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: PayrollSettings,
    tax_table: TaxTable,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/nigeria_paye")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The settings or tax table fail validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/nigeria_paye")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings: PayrollSettings = Self::load_yaml(&path.join("settings.yaml"))?;
        settings.validate()?;

        let tax_table: TaxTable = Self::load_yaml(&path.join("tax_table.yaml"))?;
        tax_table.validate()?;

        Ok(Self {
            settings,
            tax_table,
        })
    }

    /// Creates a loader from already-constructed configuration parts.
    ///
    /// Both parts are validated. This is the entry point for callers that
    /// build configuration programmatically instead of from YAML files.
    pub fn from_parts(settings: PayrollSettings, tax_table: TaxTable) -> EngineResult<Self> {
        settings.validate()?;
        tax_table.validate()?;
        Ok(Self {
            settings,
            tax_table,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the company-wide payroll settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Returns the statutory tax table.
    pub fn tax_table(&self) -> &TaxTable {
        &self.tax_table
    }
}
