//! Progressive PAYE income tax calculation.
//!
//! PAYE is a classic marginal-bracket income tax. Chargeable income is the
//! annual gross less the personal allowance and the statutory pension and
//! NHF contributions, floored at zero. The bracket walk taxes only the
//! slice of chargeable income that falls within each band, stopping early
//! once the income is exhausted.
//!
//! ## Rounding policy
//!
//! Both the tax and the chargeable income are rounded to whole kobo once,
//! at the end of the walk (half away from zero), never per bracket.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::TaxTable;

/// The result of a PAYE calculation.
///
/// Both amounts are annual, in whole kobo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayeResult {
    /// The annual PAYE income tax.
    pub paye: Decimal,
    /// The annual chargeable income the tax was computed on.
    pub taxable_income: Decimal,
}

/// Calculates annual PAYE income tax.
///
/// The steps are:
/// 1. Redefined income = annual gross − pension − NHF.
/// 2. Personal allowance = fixed component + percentage of redefined income.
/// 3. Chargeable income = max(annual gross − allowance − pension − NHF, 0).
/// 4. Walk the brackets in ascending order, taxing each band's slice of the
///    remaining income at that band's marginal rate.
/// 5. Round the tax and the chargeable income to whole kobo.
///
/// # Arguments
///
/// * `annual_gross` - The employee's annual gross pay, in kobo
/// * `pension` - The annual pension contribution already computed, in kobo
/// * `nhf` - The annual NHF contribution already computed, in kobo
/// * `table` - The statutory tax table
///
/// # Examples
///
/// An annual gross of ₦625,000 (62,500,000 kobo) with no statutory
/// deductions leaves chargeable income of exactly the first bracket:
///
/// ```
/// use payroll_engine::calculation::calculate_paye;
/// use payroll_engine::config::TaxTable;
/// use rust_decimal::Decimal;
///
/// let result = calculate_paye(
///     Decimal::from(62_500_000_i64),
///     Decimal::ZERO,
///     Decimal::ZERO,
///     &TaxTable::nigeria_paye(),
/// );
///
/// assert_eq!(result.taxable_income, Decimal::from(30_000_000_i64));
/// assert_eq!(result.paye, Decimal::from(2_100_000_i64));
/// ```
pub fn calculate_paye(
    annual_gross: Decimal,
    pension: Decimal,
    nhf: Decimal,
    table: &TaxTable,
) -> PayeResult {
    let redefined_income = annual_gross - pension - nhf;
    let personal_allowance =
        table.personal_allowance_fixed + table.personal_allowance_percent * redefined_income;

    let taxable_income =
        (annual_gross - personal_allowance - pension - nhf).max(Decimal::ZERO);

    let mut paye = Decimal::ZERO;
    let mut remaining_income = taxable_income;

    for bracket in &table.brackets {
        if remaining_income <= Decimal::ZERO {
            break;
        }

        let slice = match bracket.size {
            Some(size) => remaining_income.min(size),
            None => remaining_income,
        };

        paye += slice * bracket.rate;
        remaining_income -= slice;
    }

    PayeResult {
        paye: round_kobo(paye),
        taxable_income: round_kobo(taxable_income),
    }
}

/// Rounds an amount to whole kobo, half away from zero.
fn round_kobo(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
