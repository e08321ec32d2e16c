//! Payslip output models for the Payroll Calculation Engine.
//!
//! This module contains the [`Payslip`] type produced for each employee in a
//! payroll run and the [`RunTotals`] aggregate summarizing the whole run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fully itemized monthly payslip for one employee.
///
/// All monetary fields are monthly amounts in kobo. Tax rates are
/// percentages rounded to two decimal places; a rate is `None` when its
/// denominator is zero (e.g., a zero-salary employee), never NaN.
///
/// Note that `bonus` is reported alongside the other figures but is
/// included in neither `total_deductions` nor `net_salary`; bonuses are
/// paid out via a separate instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// The ID of the employee this payslip belongs to.
    pub employee_id: String,
    /// Monthly gross salary (annual gross / 12).
    pub gross_salary: Decimal,
    /// Basic salary component, rounded to whole kobo.
    pub basic: Decimal,
    /// Housing allowance component, rounded to whole kobo.
    pub housing: Decimal,
    /// Transport allowance component, rounded to whole kobo.
    pub transport: Decimal,
    /// Monthly chargeable income, rounded to whole kobo.
    pub taxable_income: Decimal,
    /// Monthly PAYE income tax.
    pub paye: Decimal,
    /// Monthly pension contribution.
    pub pension: Decimal,
    /// Monthly NHF contribution.
    pub nhf: Decimal,
    /// Sum of ad-hoc deduction rows for this employee.
    pub additional_deductions: Decimal,
    /// Total monthly deductions (PAYE + pension + NHF + additional).
    pub total_deductions: Decimal,
    /// Sum of ad-hoc bonus rows for this employee (reported only).
    pub bonus: Decimal,
    /// Monthly net salary (gross − total deductions).
    pub net_salary: Decimal,
    /// PAYE as a percentage of gross salary, or `None` when gross is zero.
    pub effective_tax_rate: Option<Decimal>,
    /// PAYE as a percentage of chargeable income, or `None` when
    /// chargeable income is zero.
    pub average_tax_rate: Option<Decimal>,
}

/// Aggregated totals for a payroll run.
///
/// # Example
///
/// ```
/// use payroll_engine::models::RunTotals;
/// use rust_decimal::Decimal;
///
/// let totals = RunTotals {
///     headcount: 2,
///     gross_salary: Decimal::from(40_000_000),
///     paye: Decimal::from(3_600_000),
///     pension: Decimal::from(2_560_000),
///     nhf: Decimal::from(400_000),
///     additional_deductions: Decimal::ZERO,
///     bonus: Decimal::ZERO,
///     net_salary: Decimal::from(33_440_000),
/// };
/// assert_eq!(totals.headcount, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTotals {
    /// Number of payslips in the run.
    pub headcount: u32,
    /// Sum of monthly gross salaries.
    pub gross_salary: Decimal,
    /// Sum of monthly PAYE across all payslips.
    pub paye: Decimal,
    /// Sum of monthly pension contributions.
    pub pension: Decimal,
    /// Sum of monthly NHF contributions.
    pub nhf: Decimal,
    /// Sum of ad-hoc deductions.
    pub additional_deductions: Decimal,
    /// Sum of ad-hoc bonuses.
    pub bonus: Decimal,
    /// Sum of monthly net salaries.
    pub net_salary: Decimal,
}

/// Formats an optional tax rate as a percentage string (e.g., "9.16%").
///
/// Returns `None` for a missing rate so the API layer can serialize it as
/// JSON `null` instead of a NaN-bearing string.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::format_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_rate(Some(Decimal::new(916, 2))), Some("9.16%".to_string()));
/// assert_eq!(format_rate(None), None);
/// ```
pub fn format_rate(rate: Option<Decimal>) -> Option<String> {
    rate.map(|r| format!("{}%", r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_payslip() -> Payslip {
        Payslip {
            employee_id: "emp_001".to_string(),
            gross_salary: dec("20000000"),
            basic: dec("8000000"),
            housing: dec("6000000"),
            transport: dec("2000000"),
            taxable_income: dec("13149333"),
            paye: dec("1831706.67"),
            pension: dec("1280000"),
            nhf: dec("200000"),
            additional_deductions: Decimal::ZERO,
            total_deductions: dec("3311706.67"),
            bonus: Decimal::ZERO,
            net_salary: dec("16688293.33"),
            effective_tax_rate: Some(dec("9.16")),
            average_tax_rate: Some(dec("13.93")),
        }
    }

    #[test]
    fn test_payslip_serialization_round_trip() {
        let payslip = sample_payslip();
        let json = serde_json::to_string(&payslip).unwrap();
        let deserialized: Payslip = serde_json::from_str(&json).unwrap();
        assert_eq!(payslip, deserialized);
    }

    #[test]
    fn test_payslip_none_rate_serializes_as_null() {
        let mut payslip = sample_payslip();
        payslip.effective_tax_rate = None;

        let value = serde_json::to_value(&payslip).unwrap();
        assert!(value["effective_tax_rate"].is_null());
    }

    #[test]
    fn test_format_rate_appends_percent_sign() {
        assert_eq!(format_rate(Some(dec("13.93"))), Some("13.93%".to_string()));
    }

    #[test]
    fn test_format_rate_preserves_two_decimals() {
        assert_eq!(format_rate(Some(dec("9.10"))), Some("9.10%".to_string()));
    }

    #[test]
    fn test_format_rate_none_is_none() {
        assert_eq!(format_rate(None), None);
    }
}
