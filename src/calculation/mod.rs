//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains all the calculation functions for producing payslips,
//! including statutory deduction toggle resolution, salary component splits,
//! pension and NHF contributions, progressive PAYE income tax, tax rate
//! reporting, per-employee payslip assembly, and whole-run aggregation.

mod paye;
mod payslip;
mod rates;
mod run;
mod salary_split;
mod statutory;
mod toggles;

pub use paye::{PayeResult, calculate_paye};
pub use payslip::calculate_payslip;
pub use rates::tax_rate;
pub use run::{compute_payroll, run_totals};
pub use salary_split::{SalarySplit, split_salary};
pub use statutory::{nhf_contribution, pension_contribution};
pub use toggles::{DeductionToggles, resolve_toggles};

/// Number of monthly pay periods in a year.
pub const MONTHS_PER_YEAR: rust_decimal::Decimal =
    rust_decimal::Decimal::from_parts(12, 0, 0, false, 0);
