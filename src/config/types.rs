//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Both structures validate
//! their fields after deserialization; out-of-range values are rejected
//! rather than silently defaulted.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Company-wide payroll settings.
///
/// Percentage fields are expressed on a 0–100 scale and define how much of
/// an employee's annual gross is allocated to each salary component. The
/// toggles are the company-wide fallbacks consulted when neither the
/// employee nor their group specifies a value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollSettings {
    /// Percentage of annual gross allocated to basic salary (0–100).
    #[serde(default)]
    pub basic_percent: Decimal,
    /// Percentage of annual gross allocated to housing allowance (0–100).
    #[serde(default)]
    pub housing_percent: Decimal,
    /// Percentage of annual gross allocated to transport allowance (0–100).
    #[serde(default)]
    pub transport_percent: Decimal,
    /// Company-wide fallback for pension contribution deduction.
    #[serde(default)]
    pub apply_pension: bool,
    /// Company-wide fallback for NHF contribution deduction.
    #[serde(default)]
    pub apply_nhf: bool,
    /// Company-wide fallback for PAYE income tax deduction.
    #[serde(default)]
    pub apply_paye: bool,
}

impl PayrollSettings {
    /// Creates validated settings from explicit field values.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSettings`] if any percentage falls
    /// outside the 0–100 range.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::config::PayrollSettings;
    /// use rust_decimal::Decimal;
    ///
    /// let settings = PayrollSettings::validated(
    ///     Decimal::from(40),
    ///     Decimal::from(30),
    ///     Decimal::from(10),
    ///     true,
    ///     true,
    ///     true,
    /// )
    /// .unwrap();
    /// assert_eq!(settings.basic_percent, Decimal::from(40));
    /// ```
    pub fn validated(
        basic_percent: Decimal,
        housing_percent: Decimal,
        transport_percent: Decimal,
        apply_pension: bool,
        apply_nhf: bool,
        apply_paye: bool,
    ) -> EngineResult<Self> {
        let settings = Self {
            basic_percent,
            housing_percent,
            transport_percent,
            apply_pension,
            apply_nhf,
            apply_paye,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Validates that all percentage fields fall within the 0–100 range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSettings`] naming the first offending
    /// field.
    pub fn validate(&self) -> EngineResult<()> {
        check_percent("basic_percent", self.basic_percent)?;
        check_percent("housing_percent", self.housing_percent)?;
        check_percent("transport_percent", self.transport_percent)?;
        Ok(())
    }
}

fn check_percent(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(EngineError::InvalidSettings {
            field: field.to_string(),
            message: format!("must be between 0 and 100, got {}", value),
        });
    }
    Ok(())
}

/// A single progressive tax bracket.
///
/// Brackets are applied in order; each taxes only the slice of chargeable
/// income that falls within its band.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// The width of this bracket band in kobo. `None` marks the open-ended
    /// top bracket that absorbs all remaining income.
    #[serde(default)]
    pub size: Option<Decimal>,
    /// The marginal rate for this band, as a fraction (e.g., 0.07 for 7%).
    pub rate: Decimal,
}

/// The statutory tax table for a PAYE jurisdiction.
///
/// All amounts are in kobo; all rates are fractions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxTable {
    /// Fixed component of the annual personal allowance, in kobo.
    pub personal_allowance_fixed: Decimal,
    /// Percentage component of the personal allowance, as a fraction of
    /// redefined annual income (gross minus pension and NHF).
    pub personal_allowance_percent: Decimal,
    /// Pension contribution rate, as a fraction of the BHT base
    /// (basic + housing + transport).
    pub pension_rate: Decimal,
    /// NHF contribution rate, as a fraction of basic salary.
    pub nhf_rate: Decimal,
    /// Progressive brackets in ascending order; the last must be open-ended.
    pub brackets: Vec<TaxBracket>,
}

impl TaxTable {
    /// Returns the built-in Nigerian PAYE tax table.
    ///
    /// Personal allowance is ₦200,000/year plus 20% of redefined income;
    /// the six brackets are ₦300k/₦300k/₦500k/₦500k/₦1.6m wide at
    /// 7/11/15/19/21%, with the remainder taxed at 24%. Pension is 8% of
    /// BHT and NHF is 2.5% of basic. All amounts in kobo.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::config::TaxTable;
    ///
    /// let table = TaxTable::nigeria_paye();
    /// assert_eq!(table.brackets.len(), 6);
    /// assert!(table.validate().is_ok());
    /// ```
    pub fn nigeria_paye() -> Self {
        Self {
            personal_allowance_fixed: Decimal::from(20_000_000_i64),
            personal_allowance_percent: Decimal::new(20, 2),
            pension_rate: Decimal::new(8, 2),
            nhf_rate: Decimal::new(25, 3),
            brackets: vec![
                TaxBracket {
                    size: Some(Decimal::from(30_000_000_i64)),
                    rate: Decimal::new(7, 2),
                },
                TaxBracket {
                    size: Some(Decimal::from(30_000_000_i64)),
                    rate: Decimal::new(11, 2),
                },
                TaxBracket {
                    size: Some(Decimal::from(50_000_000_i64)),
                    rate: Decimal::new(15, 2),
                },
                TaxBracket {
                    size: Some(Decimal::from(50_000_000_i64)),
                    rate: Decimal::new(19, 2),
                },
                TaxBracket {
                    size: Some(Decimal::from(160_000_000_i64)),
                    rate: Decimal::new(21, 2),
                },
                TaxBracket {
                    size: None,
                    rate: Decimal::new(24, 2),
                },
            ],
        }
    }

    /// Validates the tax table structure.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTaxTable`] if:
    /// - any rate falls outside the 0–1 range
    /// - the bracket list is empty
    /// - any bracket other than the last is open-ended
    /// - the last bracket is not open-ended
    /// - any bracket size is not positive
    pub fn validate(&self) -> EngineResult<()> {
        check_fraction("personal_allowance_percent", self.personal_allowance_percent)?;
        check_fraction("pension_rate", self.pension_rate)?;
        check_fraction("nhf_rate", self.nhf_rate)?;

        if self.personal_allowance_fixed < Decimal::ZERO {
            return Err(EngineError::InvalidTaxTable {
                field: "personal_allowance_fixed".to_string(),
                message: "cannot be negative".to_string(),
            });
        }

        if self.brackets.is_empty() {
            return Err(EngineError::InvalidTaxTable {
                field: "brackets".to_string(),
                message: "at least one bracket is required".to_string(),
            });
        }

        let last_index = self.brackets.len() - 1;
        for (index, bracket) in self.brackets.iter().enumerate() {
            check_fraction("brackets.rate", bracket.rate)?;
            match bracket.size {
                Some(size) if size <= Decimal::ZERO => {
                    return Err(EngineError::InvalidTaxTable {
                        field: "brackets".to_string(),
                        message: format!("bracket {} size must be positive, got {}", index, size),
                    });
                }
                None if index != last_index => {
                    return Err(EngineError::InvalidTaxTable {
                        field: "brackets".to_string(),
                        message: format!("only the last bracket may be open-ended (bracket {})", index),
                    });
                }
                _ => {}
            }
        }

        if self.brackets[last_index].size.is_some() {
            return Err(EngineError::InvalidTaxTable {
                field: "brackets".to_string(),
                message: "last bracket must be open-ended".to_string(),
            });
        }

        Ok(())
    }
}

fn check_fraction(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(EngineError::InvalidTaxTable {
            field: field.to_string(),
            message: format!("must be a fraction between 0 and 1, got {}", value),
        });
    }
    Ok(())
}
