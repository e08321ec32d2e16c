//! Employee and employee group models.
//!
//! This module defines the Employee struct and the EmployeeGroup struct
//! used to resolve statutory deduction toggles during a payroll run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee included in a payroll run.
///
/// All monetary amounts are in kobo (minor currency units, ×100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's contracted yearly gross pay, in kobo.
    pub annual_gross: Decimal,
    /// Optional reference to an [`EmployeeGroup`] whose toggles override
    /// the company-wide defaults.
    #[serde(default)]
    pub group_id: Option<String>,
    /// Per-employee override for National Housing Fund participation.
    /// `None` defers to the group flag or company-wide settings.
    #[serde(default)]
    pub apply_nhf: Option<bool>,
}

impl Employee {
    /// Returns true if the employee belongs to the given group.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     annual_gross: Decimal::from(240_000_000_i64),
    ///     group_id: Some("engineering".to_string()),
    ///     apply_nhf: None,
    /// };
    /// assert!(employee.is_in_group("engineering"));
    /// assert!(!employee.is_in_group("finance"));
    /// ```
    pub fn is_in_group(&self, group_id: &str) -> bool {
        self.group_id.as_deref() == Some(group_id)
    }
}

/// A group of employees sharing statutory deduction toggles.
///
/// When an employee belongs to a group, the group's flags take precedence
/// over the company-wide settings (but not over per-employee overrides).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeGroup {
    /// Unique identifier for the group.
    pub id: String,
    /// Whether pension contributions are deducted for group members.
    #[serde(default)]
    pub apply_pension: bool,
    /// Whether NHF contributions are deducted for group members.
    #[serde(default)]
    pub apply_nhf: bool,
    /// Whether PAYE income tax is deducted for group members.
    #[serde(default)]
    pub apply_paye: bool,
}
