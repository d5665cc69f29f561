use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

/// Calculate the constant monthly payment (PMT) for a fixed-rate loan.
///
/// `pmt = principal * r / (1 - (1 + r)^-n)` with `r` the monthly rate and
/// `n` the number of monthly installments, rounded half-up to 6 decimals.
pub fn compute_pmt(principal: Money, annual_rate: Rate, term_years: u32) -> Result<Money> {
    if !principal.is_positive() {
        return Err(LoanError::InvalidPrincipal { amount: principal });
    }
    if term_years == 0 {
        return Err(LoanError::InvalidTerm { years: term_years });
    }
    if annual_rate.is_negative() {
        return Err(LoanError::NegativeRate { rate: annual_rate });
    }
    // denominator degenerates to 1 - 1 = 0 at zero rate
    if annual_rate.is_zero() {
        return Err(LoanError::ZeroRate);
    }

    let r = annual_rate.monthly_rate().as_decimal();
    let n = term_years * 12;

    // (1 + r)^n by repeated multiplication, n is bounded at 600
    let base = Decimal::ONE + r;
    let mut compound = Decimal::ONE;
    for _ in 0..n {
        compound *= base;
    }

    let pmt = principal.as_decimal() * r / (Decimal::ONE - Decimal::ONE / compound);
    Ok(Money::from_decimal(pmt))
}
