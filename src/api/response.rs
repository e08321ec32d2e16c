//! Response types for the Payroll Calculation Engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API. Tax rates leave the engine as `Option<Decimal>` and are
//! serialized here as percentage strings (or `null` when undefined).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{Payslip, RunTotals, format_rate};

/// Response body for a successful payroll run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunResponse {
    /// Unique identifier for this payroll run.
    pub run_id: Uuid,
    /// When the run was calculated.
    pub calculated_at: DateTime<Utc>,
    /// One payslip per employee, in request order.
    pub payslips: Vec<PayslipResponse>,
    /// Run-level totals.
    pub totals: RunTotals,
}

/// A payslip as serialized on the wire.
///
/// Identical to [`Payslip`] except that the tax rates are formatted as
/// percentage strings (e.g., `"9.16%"`) or `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipResponse {
    /// The ID of the employee this payslip belongs to.
    pub employee_id: String,
    /// Monthly gross salary.
    pub gross_salary: Decimal,
    /// Basic salary component.
    pub basic: Decimal,
    /// Housing allowance component.
    pub housing: Decimal,
    /// Transport allowance component.
    pub transport: Decimal,
    /// Monthly chargeable income.
    pub taxable_income: Decimal,
    /// Monthly PAYE income tax.
    pub paye: Decimal,
    /// Monthly pension contribution.
    pub pension: Decimal,
    /// Monthly NHF contribution.
    pub nhf: Decimal,
    /// Sum of ad-hoc deduction rows.
    pub additional_deductions: Decimal,
    /// Total monthly deductions.
    pub total_deductions: Decimal,
    /// Sum of ad-hoc bonus rows (reported only).
    pub bonus: Decimal,
    /// Monthly net salary.
    pub net_salary: Decimal,
    /// Formatted effective tax rate, e.g. "9.16%".
    pub effective_tax_rate: Option<String>,
    /// Formatted average tax rate, e.g. "13.93%".
    pub average_tax_rate: Option<String>,
}

impl From<Payslip> for PayslipResponse {
    fn from(payslip: Payslip) -> Self {
        Self {
            employee_id: payslip.employee_id,
            gross_salary: payslip.gross_salary,
            basic: payslip.basic,
            housing: payslip.housing,
            transport: payslip.transport,
            taxable_income: payslip.taxable_income,
            paye: payslip.paye,
            pension: payslip.pension,
            nhf: payslip.nhf,
            additional_deductions: payslip.additional_deductions,
            total_deductions: payslip.total_deductions,
            bonus: payslip.bonus,
            net_salary: payslip.net_salary,
            effective_tax_rate: format_rate(payslip.effective_tax_rate),
            average_tax_rate: format_rate(payslip.average_tax_rate),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidSettings { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid payroll settings field '{}'", field),
                    message,
                ),
            },
            EngineError::InvalidTaxTable { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid tax table field '{}'", field),
                    message,
                ),
            },
            EngineError::InvalidEmployee {
                employee_id,
                field,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid employee '{}' field '{}'", employee_id, field),
                    message,
                ),
            },
        }
    }
}
