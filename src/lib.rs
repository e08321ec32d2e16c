//! Payroll Calculation Engine for Nigerian PAYE payroll
//!
//! This crate provides functionality for running monthly payroll under the
//! Nigerian PAYE regime: salary component splits, statutory pension and NHF
//! deductions, progressive marginal income tax, ad-hoc deductions and bonuses,
//! and fully itemized payslips.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
