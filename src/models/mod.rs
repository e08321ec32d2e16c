//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod adjustment;
mod employee;
mod payslip;

pub use adjustment::{Adjustment, sum_for_employee};
pub use employee::{Employee, EmployeeGroup};
pub use payslip::{Payslip, RunTotals, format_rate};
