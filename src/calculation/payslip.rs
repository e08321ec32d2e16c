//! Per-employee payslip assembly.
//!
//! This module runs the full monthly payslip pipeline for one employee:
//! toggle resolution, salary split, statutory contributions, PAYE, ad-hoc
//! deductions and bonuses, and the final net salary.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{PayrollSettings, TaxTable};
use crate::error::{EngineError, EngineResult};
use crate::models::{Adjustment, Employee, EmployeeGroup, Payslip, sum_for_employee};

use super::MONTHS_PER_YEAR;
use super::paye::calculate_paye;
use super::rates::tax_rate;
use super::salary_split::split_salary;
use super::statutory::{nhf_contribution, pension_contribution};
use super::toggles::resolve_toggles;

/// Calculates the monthly payslip for one employee.
///
/// The pipeline:
/// 1. Resolve the deduction toggles (employee → group → company settings).
/// 2. Split the annual gross into basic/housing/transport and the BHT base.
/// 3. Compute annual pension (8% × BHT) and NHF (2.5% × basic) when toggled.
/// 4. Compute annual PAYE over the tax table when toggled.
/// 5. Convert to monthly figures, sum the employee's ad-hoc deduction and
///    bonus rows, and assemble the payslip.
///
/// Monthly chargeable income and the salary components are rounded to whole
/// kobo; the other monthly figures keep their full precision. The bonus sum
/// is reported on the payslip but deliberately excluded from both
/// `total_deductions` and `net_salary`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidEmployee`] when `annual_gross` is negative.
pub fn calculate_payslip(
    employee: &Employee,
    group: Option<&EmployeeGroup>,
    deductions: &[Adjustment],
    bonuses: &[Adjustment],
    settings: &PayrollSettings,
    table: &TaxTable,
) -> EngineResult<Payslip> {
    if employee.annual_gross < Decimal::ZERO {
        return Err(EngineError::InvalidEmployee {
            employee_id: employee.id.clone(),
            field: "annual_gross".to_string(),
            message: format!("cannot be negative, got {}", employee.annual_gross),
        });
    }

    let monthly_gross = employee.annual_gross / MONTHS_PER_YEAR;

    let toggles = resolve_toggles(employee, group, settings);
    let split = split_salary(employee.annual_gross, settings);

    let annual_pension = pension_contribution(&split, &toggles, table);
    let annual_nhf = nhf_contribution(&split, &toggles, table);

    let (annual_paye, annual_taxable) = if toggles.paye {
        let result = calculate_paye(employee.annual_gross, annual_pension, annual_nhf, table);
        (result.paye, result.taxable_income)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let monthly_paye = annual_paye / MONTHS_PER_YEAR;
    let monthly_taxable = round_kobo(annual_taxable / MONTHS_PER_YEAR);
    let monthly_pension = annual_pension / MONTHS_PER_YEAR;
    let monthly_nhf = annual_nhf / MONTHS_PER_YEAR;

    let additional_deductions = sum_for_employee(&employee.id, deductions);
    let bonus = sum_for_employee(&employee.id, bonuses);

    let total_deductions = monthly_paye + monthly_pension + monthly_nhf + additional_deductions;
    let net_salary = monthly_gross - total_deductions;

    Ok(Payslip {
        employee_id: employee.id.clone(),
        gross_salary: monthly_gross,
        basic: round_kobo(split.basic / MONTHS_PER_YEAR),
        housing: round_kobo(split.housing / MONTHS_PER_YEAR),
        transport: round_kobo(split.transport / MONTHS_PER_YEAR),
        taxable_income: monthly_taxable,
        paye: monthly_paye,
        pension: monthly_pension,
        nhf: monthly_nhf,
        additional_deductions,
        total_deductions,
        bonus,
        net_salary,
        effective_tax_rate: tax_rate(monthly_paye, monthly_gross),
        average_tax_rate: tax_rate(monthly_paye, monthly_taxable),
    })
}

fn round_kobo(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn settings(pension: bool, nhf: bool, paye: bool) -> PayrollSettings {
        PayrollSettings::validated(dec("40"), dec("30"), dec("10"), pension, nhf, paye).unwrap()
    }

    fn employee(annual_gross: &str) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            annual_gross: dec(annual_gross),
            group_id: None,
            apply_nhf: None,
        }
    }

    fn deduction(employee_id: &str, amount: &str) -> Adjustment {
        Adjustment {
            employee_id: employee_id.to_string(),
            amount: dec(amount),
            description: None,
        }
    }

    /// Full pipeline for a ₦2.4m/year employee with every toggle on.
    #[test]
    fn test_full_payslip_with_all_deductions() {
        let payslip = calculate_payslip(
            &employee("240000000"),
            None,
            &[],
            &[],
            &settings(true, true, true),
            &TaxTable::nigeria_paye(),
        )
        .unwrap();

        assert_eq!(payslip.gross_salary, dec("20000000"));
        assert_eq!(payslip.basic, dec("8000000"));
        assert_eq!(payslip.housing, dec("6000000"));
        assert_eq!(payslip.transport, dec("2000000"));
        // Annual: pension 15,360,000; NHF 2,400,000; taxable 157,792,000;
        // PAYE 21,980,480.
        assert_eq!(payslip.pension, dec("1280000"));
        assert_eq!(payslip.nhf, dec("200000"));
        assert_eq!(payslip.taxable_income, dec("13149333"));
        assert_eq!(payslip.paye, dec("21980480") / dec("12"));
        assert_eq!(
            payslip.total_deductions,
            payslip.paye + payslip.pension + payslip.nhf
        );
        assert_eq!(
            payslip.net_salary,
            payslip.gross_salary - payslip.total_deductions
        );
        assert_eq!(payslip.effective_tax_rate, Some(dec("9.16")));
        assert_eq!(payslip.average_tax_rate, Some(dec("13.93")));
    }

    /// With every toggle off, net salary is exactly gross minus the ad-hoc
    /// deductions.
    #[test]
    fn test_toggle_independence() {
        let rows = vec![deduction("emp_001", "50000")];
        let payslip = calculate_payslip(
            &employee("240000000"),
            None,
            &rows,
            &[],
            &settings(false, false, false),
            &TaxTable::nigeria_paye(),
        )
        .unwrap();

        assert_eq!(payslip.pension, Decimal::ZERO);
        assert_eq!(payslip.nhf, Decimal::ZERO);
        assert_eq!(payslip.paye, Decimal::ZERO);
        assert_eq!(payslip.taxable_income, Decimal::ZERO);
        assert_eq!(payslip.additional_deductions, dec("50000"));
        assert_eq!(
            payslip.net_salary,
            payslip.gross_salary - dec("50000")
        );
        assert_eq!(payslip.effective_tax_rate, Some(dec("0.00")));
        // Zero chargeable income: the average rate has no denominator.
        assert_eq!(payslip.average_tax_rate, None);
    }

    /// Two deduction rows for the same employee aggregate and are
    /// subtracted once.
    #[test]
    fn test_deduction_aggregation() {
        let rows = vec![
            deduction("emp_001", "1000"),
            deduction("emp_001", "2000"),
            deduction("emp_other", "777"),
        ];
        let payslip = calculate_payslip(
            &employee("240000000"),
            None,
            &rows,
            &[],
            &settings(false, false, false),
            &TaxTable::nigeria_paye(),
        )
        .unwrap();

        assert_eq!(payslip.additional_deductions, dec("3000"));
        assert_eq!(payslip.net_salary, payslip.gross_salary - dec("3000"));
    }

    /// Bonuses are reported on the payslip but excluded from both the
    /// total deductions and the net salary. Pinned deliberately: changing
    /// this is a product decision, not a refactor.
    #[test]
    fn test_bonus_is_reported_but_excluded_from_net() {
        let bonuses = vec![deduction("emp_001", "100000")];

        let with_bonus = calculate_payslip(
            &employee("240000000"),
            None,
            &[],
            &bonuses,
            &settings(true, true, true),
            &TaxTable::nigeria_paye(),
        )
        .unwrap();
        let without_bonus = calculate_payslip(
            &employee("240000000"),
            None,
            &[],
            &[],
            &settings(true, true, true),
            &TaxTable::nigeria_paye(),
        )
        .unwrap();

        assert_eq!(with_bonus.bonus, dec("100000"));
        assert_eq!(without_bonus.bonus, Decimal::ZERO);
        assert_eq!(with_bonus.net_salary, without_bonus.net_salary);
        assert_eq!(with_bonus.total_deductions, without_bonus.total_deductions);
    }

    /// Zero-salary employee: both rates are None, never NaN.
    #[test]
    fn test_zero_salary_rates_are_none() {
        let payslip = calculate_payslip(
            &employee("0"),
            None,
            &[],
            &[],
            &settings(true, true, true),
            &TaxTable::nigeria_paye(),
        )
        .unwrap();

        assert_eq!(payslip.gross_salary, Decimal::ZERO);
        assert_eq!(payslip.effective_tax_rate, None);
        assert_eq!(payslip.average_tax_rate, None);
    }

    #[test]
    fn test_negative_annual_gross_is_rejected() {
        let result = calculate_payslip(
            &employee("-1"),
            None,
            &[],
            &[],
            &settings(true, true, true),
            &TaxTable::nigeria_paye(),
        );
        match result.unwrap_err() {
            EngineError::InvalidEmployee {
                employee_id, field, ..
            } => {
                assert_eq!(employee_id, "emp_001");
                assert_eq!(field, "annual_gross");
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    /// Group flags override the company settings for pension and PAYE.
    #[test]
    fn test_group_flags_override_company_settings() {
        let group = EmployeeGroup {
            id: "contractors".to_string(),
            apply_pension: false,
            apply_nhf: false,
            apply_paye: false,
        };
        let mut emp = employee("240000000");
        emp.group_id = Some("contractors".to_string());

        let payslip = calculate_payslip(
            &emp,
            Some(&group),
            &[],
            &[],
            &settings(true, true, true),
            &TaxTable::nigeria_paye(),
        )
        .unwrap();

        assert_eq!(payslip.pension, Decimal::ZERO);
        assert_eq!(payslip.nhf, Decimal::ZERO);
        assert_eq!(payslip.paye, Decimal::ZERO);
    }

    /// Negative deduction rows invert and increase net pay.
    #[test]
    fn test_negative_deduction_increases_net() {
        let rows = vec![deduction("emp_001", "-5000")];
        let payslip = calculate_payslip(
            &employee("240000000"),
            None,
            &rows,
            &[],
            &settings(false, false, false),
            &TaxTable::nigeria_paye(),
        )
        .unwrap();

        assert_eq!(payslip.additional_deductions, dec("-5000"));
        assert_eq!(payslip.net_salary, payslip.gross_salary + dec("5000"));
    }
}
