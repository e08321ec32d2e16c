//! Statutory pension and NHF contribution calculation.
//!
//! Pension contributions are charged on the BHT base (basic + housing +
//! transport); NHF contributions are charged on basic salary only. Both are
//! annual amounts and both are zero when the corresponding toggle is off.

use rust_decimal::Decimal;

use crate::config::TaxTable;

use super::salary_split::SalarySplit;
use super::toggles::DeductionToggles;

/// Computes the annual pension contribution.
///
/// Returns `pension_rate × BHT` when the pension toggle is on, zero
/// otherwise. The Nigerian statutory rate is 8%.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{
///     DeductionToggles, pension_contribution, split_salary,
/// };
/// use payroll_engine::config::{PayrollSettings, TaxTable};
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
/// let split = split_salary(Decimal::from(240_000_000_i64), &settings);
/// let toggles = DeductionToggles { pension: true, nhf: true, paye: true };
///
/// let pension = pension_contribution(&split, &toggles, &TaxTable::nigeria_paye());
/// assert_eq!(pension, Decimal::from(15_360_000_i64));
/// ```
pub fn pension_contribution(
    split: &SalarySplit,
    toggles: &DeductionToggles,
    table: &TaxTable,
) -> Decimal {
    if toggles.pension {
        split.bht * table.pension_rate
    } else {
        Decimal::ZERO
    }
}

/// Computes the annual NHF contribution.
///
/// Returns `nhf_rate × basic` when the NHF toggle is on, zero otherwise.
/// The Nigerian statutory rate is 2.5%.
pub fn nhf_contribution(
    split: &SalarySplit,
    toggles: &DeductionToggles,
    table: &TaxTable,
) -> Decimal {
    if toggles.nhf {
        split.basic * table.nhf_rate
    } else {
        Decimal::ZERO
    }
}
