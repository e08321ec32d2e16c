//! Whole-run payroll calculation.
//!
//! This module maps a list of employees to payslips and aggregates the run
//! totals. The calculation is pure: identical inputs always produce
//! identical payslips.

use rust_decimal::Decimal;

use crate::config::{PayrollSettings, TaxTable};
use crate::error::EngineResult;
use crate::models::{Adjustment, Employee, EmployeeGroup, Payslip, RunTotals};

use super::payslip::calculate_payslip;

/// Computes one payslip per employee for a payroll run.
///
/// An empty employee list yields an empty result, not an error. Each
/// employee's group is resolved by `group_id`; an unknown group ID falls
/// back to the company-wide settings.
///
/// # Errors
///
/// Returns the first [`crate::error::EngineError::InvalidEmployee`]
/// encountered (negative annual gross).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_payroll;
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
///
/// let payslips =
///     compute_payroll(&[], &[], &[], &[], &settings, &TaxTable::nigeria_paye()).unwrap();
/// assert!(payslips.is_empty());
/// ```
pub fn compute_payroll(
    employees: &[Employee],
    groups: &[EmployeeGroup],
    deductions: &[Adjustment],
    bonuses: &[Adjustment],
    settings: &PayrollSettings,
    table: &TaxTable,
) -> EngineResult<Vec<Payslip>> {
    employees
        .iter()
        .map(|employee| {
            let group = employee
                .group_id
                .as_deref()
                .and_then(|group_id| groups.iter().find(|g| g.id == group_id));
            calculate_payslip(employee, group, deductions, bonuses, settings, table)
        })
        .collect()
}

/// Aggregates run-level totals over a set of payslips.
pub fn run_totals(payslips: &[Payslip]) -> RunTotals {
    let mut totals = RunTotals {
        headcount: payslips.len() as u32,
        gross_salary: Decimal::ZERO,
        paye: Decimal::ZERO,
        pension: Decimal::ZERO,
        nhf: Decimal::ZERO,
        additional_deductions: Decimal::ZERO,
        bonus: Decimal::ZERO,
        net_salary: Decimal::ZERO,
    };

    for payslip in payslips {
        totals.gross_salary += payslip.gross_salary;
        totals.paye += payslip.paye;
        totals.pension += payslip.pension;
        totals.nhf += payslip.nhf;
        totals.additional_deductions += payslip.additional_deductions;
        totals.bonus += payslip.bonus;
        totals.net_salary += payslip.net_salary;
    }

    totals
}
