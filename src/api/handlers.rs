//! HTTP request handlers for the Payroll Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_payroll, run_totals};
use crate::models::{Adjustment, Employee, EmployeeGroup};

use super::request::PayrollRunRequest;
use super::response::{ApiError, ApiErrorResponse, PayrollRunResponse, PayslipResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /payroll/calculate endpoint.
///
/// Accepts a payroll run request and returns one payslip per employee plus
/// run totals.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRunRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll run request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Resolve the run settings: per-run override or the loaded defaults
    let settings = match request.settings {
        Some(override_settings) => match override_settings.into_settings() {
            Ok(settings) => settings,
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Invalid settings override"
                );
                let api_error: ApiErrorResponse = err.into();
                return (
                    api_error.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(api_error.error),
                )
                    .into_response();
            }
        },
        None => state.config().settings().clone(),
    };

    // Convert request types to domain types
    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();
    let groups: Vec<EmployeeGroup> = request.groups.into_iter().map(Into::into).collect();
    let deductions: Vec<Adjustment> = request.deductions.into_iter().map(Into::into).collect();
    let bonuses: Vec<Adjustment> = request.bonuses.into_iter().map(Into::into).collect();

    // Perform the calculation
    let start_time = Instant::now();
    match compute_payroll(
        &employees,
        &groups,
        &deductions,
        &bonuses,
        &settings,
        state.config().tax_table(),
    ) {
        Ok(payslips) => {
            let duration = start_time.elapsed();
            let totals = run_totals(&payslips);
            info!(
                correlation_id = %correlation_id,
                headcount = totals.headcount,
                net_total = %totals.net_salary,
                duration_us = duration.as_micros(),
                "Payroll run completed successfully"
            );
            let response = PayrollRunResponse {
                run_id: correlation_id,
                calculated_at: Utc::now(),
                payslips: payslips.into_iter().map(PayslipResponse::from).collect(),
                totals,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll run failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
