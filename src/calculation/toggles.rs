//! Statutory deduction toggle resolution.
//!
//! Each statutory deduction (pension, NHF, PAYE) can be switched on or off
//! at several levels. This module resolves the effective toggles for one
//! employee through an explicit, ordered precedence chain:
//!
//! 1. Per-employee override (NHF only)
//! 2. The employee's group flag, when the employee belongs to a group
//! 3. The company-wide setting
//!
//! An employee with an unknown `group_id` falls through to the company-wide
//! settings, the same as an employee with no group at all.

use crate::config::PayrollSettings;
use crate::models::{Employee, EmployeeGroup};

/// The effective statutory deduction toggles for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeductionToggles {
    /// Whether to deduct pension contributions.
    pub pension: bool,
    /// Whether to deduct NHF contributions.
    pub nhf: bool,
    /// Whether to deduct PAYE income tax.
    pub paye: bool,
}

impl DeductionToggles {
    /// Returns toggles with every deduction switched off.
    pub fn none() -> Self {
        Self {
            pension: false,
            nhf: false,
            paye: false,
        }
    }
}

/// Resolves one toggle through the override chain.
fn resolve(employee_override: Option<bool>, group_flag: Option<bool>, company_flag: bool) -> bool {
    employee_override
        .or(group_flag)
        .unwrap_or(company_flag)
}

/// Resolves the effective deduction toggles for an employee.
///
/// Only NHF has a per-employee override in the data model; pension and PAYE
/// resolve from the group flag (if any) and otherwise the company setting.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_toggles;
/// use payroll_engine::config::PayrollSettings;
/// use payroll_engine::models::Employee;
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
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     annual_gross: Decimal::from(240_000_000_i64),
///     group_id: None,
///     apply_nhf: Some(false),
/// };
///
/// let toggles = resolve_toggles(&employee, None, &settings);
/// assert!(toggles.pension);
/// assert!(!toggles.nhf);
/// assert!(toggles.paye);
/// ```
pub fn resolve_toggles(
    employee: &Employee,
    group: Option<&EmployeeGroup>,
    settings: &PayrollSettings,
) -> DeductionToggles {
    DeductionToggles {
        pension: resolve(None, group.map(|g| g.apply_pension), settings.apply_pension),
        nhf: resolve(
            employee.apply_nhf,
            group.map(|g| g.apply_nhf),
            settings.apply_nhf,
        ),
        paye: resolve(None, group.map(|g| g.apply_paye), settings.apply_paye),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn settings_with_nhf(apply_nhf: bool) -> PayrollSettings {
        PayrollSettings::validated(
            Decimal::from(40),
            Decimal::from(30),
            Decimal::from(10),
            false,
            apply_nhf,
            false,
        )
        .unwrap()
    }

    fn employee(apply_nhf: Option<bool>, group_id: Option<&str>) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            annual_gross: Decimal::from(120_000_000_i64),
            group_id: group_id.map(String::from),
            apply_nhf,
        }
    }

    fn group(apply_nhf: bool) -> EmployeeGroup {
        EmployeeGroup {
            id: "grp_001".to_string(),
            apply_pension: false,
            apply_nhf,
            apply_paye: false,
        }
    }

    // NHF precedence: all 2^3 combinations of
    // (employee override present, group present, company flag).

    #[test]
    fn test_nhf_no_override_no_group_company_false() {
        let toggles = resolve_toggles(&employee(None, None), None, &settings_with_nhf(false));
        assert!(!toggles.nhf);
    }

    #[test]
    fn test_nhf_no_override_no_group_company_true() {
        let toggles = resolve_toggles(&employee(None, None), None, &settings_with_nhf(true));
        assert!(toggles.nhf);
    }

    #[test]
    fn test_nhf_no_override_group_overrides_company_false() {
        let g = group(true);
        let toggles = resolve_toggles(
            &employee(None, Some("grp_001")),
            Some(&g),
            &settings_with_nhf(false),
        );
        assert!(toggles.nhf);
    }

    #[test]
    fn test_nhf_no_override_group_overrides_company_true() {
        let g = group(false);
        let toggles = resolve_toggles(
            &employee(None, Some("grp_001")),
            Some(&g),
            &settings_with_nhf(true),
        );
        assert!(!toggles.nhf);
    }

    #[test]
    fn test_nhf_employee_override_beats_company_false() {
        let toggles = resolve_toggles(
            &employee(Some(true), None),
            None,
            &settings_with_nhf(false),
        );
        assert!(toggles.nhf);
    }

    #[test]
    fn test_nhf_employee_override_beats_company_true() {
        let toggles = resolve_toggles(
            &employee(Some(false), None),
            None,
            &settings_with_nhf(true),
        );
        assert!(!toggles.nhf);
    }

    #[test]
    fn test_nhf_employee_override_beats_group_and_company_false() {
        let g = group(false);
        let toggles = resolve_toggles(
            &employee(Some(true), Some("grp_001")),
            Some(&g),
            &settings_with_nhf(false),
        );
        assert!(toggles.nhf);
    }

    #[test]
    fn test_nhf_employee_override_beats_group_and_company_true() {
        let g = group(true);
        let toggles = resolve_toggles(
            &employee(Some(false), Some("grp_001")),
            Some(&g),
            &settings_with_nhf(true),
        );
        assert!(!toggles.nhf);
    }

    #[test]
    fn test_pension_and_paye_have_no_employee_override() {
        let g = EmployeeGroup {
            id: "grp_001".to_string(),
            apply_pension: true,
            apply_nhf: false,
            apply_paye: true,
        };
        let toggles = resolve_toggles(
            &employee(Some(true), Some("grp_001")),
            Some(&g),
            &settings_with_nhf(false),
        );
        assert!(toggles.pension);
        assert!(toggles.paye);
    }

    #[test]
    fn test_pension_and_paye_fall_back_to_company_settings() {
        let settings = PayrollSettings::validated(
            Decimal::from(40),
            Decimal::from(30),
            Decimal::from(10),
            true,
            false,
            true,
        )
        .unwrap();
        let toggles = resolve_toggles(&employee(None, None), None, &settings);
        assert!(toggles.pension);
        assert!(toggles.paye);
        assert!(!toggles.nhf);
    }

    #[test]
    fn test_none_constructor_switches_everything_off() {
        let toggles = DeductionToggles::none();
        assert!(!toggles.pension);
        assert!(!toggles.nhf);
        assert!(!toggles.paye);
    }
}
