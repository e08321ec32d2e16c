//! HTTP API module for the Payroll Calculation Engine.
//!
//! This module provides the REST API endpoint for running payroll
//! calculations over a batch of employees.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayrollRunRequest;
pub use response::ApiError;
pub use state::AppState;
