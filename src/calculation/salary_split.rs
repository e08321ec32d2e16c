//! Salary component split calculation.
//!
//! Nigerian payroll allocates a percentage of annual gross to basic salary,
//! housing allowance, and transport allowance. The sum of the three
//! components (BHT) is the statutory base for pension contributions.

use rust_decimal::Decimal;

use crate::config::PayrollSettings;

/// Annual salary components derived from the settings percentages.
///
/// All amounts are annual, in kobo, and unrounded; rounding happens only
/// when the monthly figures are reported on the payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalarySplit {
    /// Annual basic salary.
    pub basic: Decimal,
    /// Annual housing allowance.
    pub housing: Decimal,
    /// Annual transport allowance.
    pub transport: Decimal,
    /// Basic + housing + transport, the statutory deduction base.
    pub bht: Decimal,
}

/// Splits an annual gross salary into its components.
///
/// Each component is the settings percentage of the annual gross. A
/// percentage the settings omit contributes zero (settings default omitted
/// fields to 0 at deserialization).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_salary;
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
///
/// let split = split_salary(Decimal::from(240_000_000_i64), &settings);
/// assert_eq!(split.basic, Decimal::from(96_000_000_i64));
/// assert_eq!(split.housing, Decimal::from(72_000_000_i64));
/// assert_eq!(split.transport, Decimal::from(24_000_000_i64));
/// assert_eq!(split.bht, Decimal::from(192_000_000_i64));
/// ```
pub fn split_salary(annual_gross: Decimal, settings: &PayrollSettings) -> SalarySplit {
    let basic = annual_gross * settings.basic_percent / Decimal::ONE_HUNDRED;
    let housing = annual_gross * settings.housing_percent / Decimal::ONE_HUNDRED;
    let transport = annual_gross * settings.transport_percent / Decimal::ONE_HUNDRED;

    SalarySplit {
        basic,
        housing,
        transport,
        bht: basic + housing + transport,
    }
}
