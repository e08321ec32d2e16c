//! Configuration loading and management for the Payroll Calculation Engine.
//!
//! This module provides functionality to load payroll configurations from
//! YAML files, including company-wide payroll settings and the statutory
//! PAYE tax table.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/nigeria_paye").unwrap();
//! println!("Basic salary split: {}%", config.settings().basic_percent);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollSettings, TaxBracket, TaxTable};
