//! Ad-hoc payroll adjustment rows.
//!
//! Deductions and bonuses are supplied to a payroll run as flat lists of
//! adjustment rows keyed by employee ID. Rows for the same employee are
//! summed before being applied to the payslip.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single ad-hoc adjustment row (deduction or bonus).
///
/// Amounts are in kobo. Negative amounts are accepted and invert the
/// arithmetic effect: a negative deduction increases net pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    /// The ID of the employee this row applies to.
    pub employee_id: String,
    /// The amount in kobo.
    pub amount: Decimal,
    /// Optional free-text description (e.g., "salary advance repayment").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Sums all adjustment rows that match the given employee ID.
///
/// Returns zero when the list contains no matching rows.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::{Adjustment, sum_for_employee};
/// use rust_decimal::Decimal;
///
/// let rows = vec![
///     Adjustment {
///         employee_id: "emp_001".to_string(),
///         amount: Decimal::from(1000),
///         description: None,
///     },
///     Adjustment {
///         employee_id: "emp_001".to_string(),
///         amount: Decimal::from(2000),
///         description: None,
///     },
///     Adjustment {
///         employee_id: "emp_002".to_string(),
///         amount: Decimal::from(500),
///         description: None,
///     },
/// ];
///
/// assert_eq!(sum_for_employee("emp_001", &rows), Decimal::from(3000));
/// assert_eq!(sum_for_employee("emp_003", &rows), Decimal::ZERO);
/// ```
pub fn sum_for_employee(employee_id: &str, rows: &[Adjustment]) -> Decimal {
    rows.iter()
        .filter(|row| row.employee_id == employee_id)
        .map(|row| row.amount)
        .sum()
}
