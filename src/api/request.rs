//! Request types for the Payroll Calculation Engine API.
//!
//! This module defines the JSON request structures for the
//! `/payroll/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayrollSettings;
use crate::models::{Adjustment, Employee, EmployeeGroup};

/// Request body for the `/payroll/calculate` endpoint.
///
/// Contains the employees to pay, their groups, ad-hoc deduction and bonus
/// rows, and an optional settings override. When `settings` is absent the
/// company-wide settings loaded at startup are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunRequest {
    /// The employees included in this payroll run.
    #[serde(default)]
    pub employees: Vec<EmployeeRequest>,
    /// The employee groups referenced by `group_id`.
    #[serde(default)]
    pub groups: Vec<GroupRequest>,
    /// Ad-hoc deduction rows.
    #[serde(default)]
    pub deductions: Vec<AdjustmentRequest>,
    /// Ad-hoc bonus rows.
    #[serde(default)]
    pub bonuses: Vec<AdjustmentRequest>,
    /// Optional per-run override of the company-wide payroll settings.
    #[serde(default)]
    pub settings: Option<SettingsRequest>,
}

/// Employee information in a payroll run request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Annual gross pay in kobo.
    pub annual_gross: Decimal,
    /// Optional group membership.
    #[serde(default)]
    pub group_id: Option<String>,
    /// Optional per-employee NHF override.
    #[serde(default)]
    pub apply_nhf: Option<bool>,
}

/// Employee group information in a payroll run request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRequest {
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

/// An ad-hoc adjustment row (deduction or bonus) in a payroll run request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentRequest {
    /// The ID of the employee this row applies to.
    pub employee_id: String,
    /// The amount in kobo.
    pub amount: Decimal,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Per-run payroll settings override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsRequest {
    /// Percentage of annual gross allocated to basic salary (0-100).
    #[serde(default)]
    pub basic_percent: Decimal,
    /// Percentage of annual gross allocated to housing allowance (0-100).
    #[serde(default)]
    pub housing_percent: Decimal,
    /// Percentage of annual gross allocated to transport allowance (0-100).
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

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            annual_gross: req.annual_gross,
            group_id: req.group_id,
            apply_nhf: req.apply_nhf,
        }
    }
}

impl From<GroupRequest> for EmployeeGroup {
    fn from(req: GroupRequest) -> Self {
        EmployeeGroup {
            id: req.id,
            apply_pension: req.apply_pension,
            apply_nhf: req.apply_nhf,
            apply_paye: req.apply_paye,
        }
    }
}

impl From<AdjustmentRequest> for Adjustment {
    fn from(req: AdjustmentRequest) -> Self {
        Adjustment {
            employee_id: req.employee_id,
            amount: req.amount,
            description: req.description,
        }
    }
}

impl SettingsRequest {
    /// Converts the override into validated [`PayrollSettings`].
    pub fn into_settings(self) -> crate::error::EngineResult<PayrollSettings> {
        PayrollSettings::validated(
            self.basic_percent,
            self.housing_percent,
            self.transport_percent,
            self.apply_pension,
            self.apply_nhf,
            self.apply_paye,
        )
    }
}
