use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::schedule::pmt::compute_pmt;
use crate::types::{LoanTerms, RepaymentRow};

/// full repayment schedule for one loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentSchedule {
    /// constant monthly payment applied in every period
    pub payment: Money,
    pub rows: Vec<RepaymentRow>,
    pub total_interest: Money,
    pub total_principal: Money,
}

impl RepaymentSchedule {
    /// derive the payment from the terms and generate the schedule
    pub fn build(terms: &LoanTerms) -> Result<Self> {
        let payment = compute_pmt(terms.principal, terms.annual_rate, terms.term_years)?;
        Self::generate(terms, payment)
    }

    /// Generate the month-by-month schedule for a known payment amount.
    ///
    /// Each period charges interest on the outstanding balance, the rest of
    /// the payment amortizes principal, and every intermediate quantity is
    /// rounded to 6 decimals so stored rows are reproducible from inputs.
    /// The final period sets the balance to exactly zero, absorbing the
    /// rounding drift accumulated along the way.
    pub fn generate(terms: &LoanTerms, payment: Money) -> Result<Self> {
        let periods = terms.total_periods();
        if periods < 1 {
            return Err(LoanError::InvalidTerm {
                years: terms.term_years,
            });
        }

        let monthly_rate = terms.annual_rate.monthly_rate().as_decimal();

        // running balance is local to this call; concurrent generations
        // never share it
        let mut balance = terms.principal;
        let mut rows = Vec::with_capacity(periods as usize);
        let mut total_interest = Money::ZERO;
        let mut total_principal = Money::ZERO;

        for period in 1..=periods {
            let interest = balance * monthly_rate;
            let principal = payment - interest;

            let new_balance = if period == periods {
                Money::ZERO
            } else {
                balance - principal
            };

            total_interest += interest;
            total_principal += principal;

            rows.push(RepaymentRow {
                period,
                due_date: terms.due_date(period)?,
                payment_amount: payment,
                principal,
                interest,
                balance: new_balance,
            });

            balance = new_balance;
        }

        Ok(Self {
            payment,
            rows,
            total_interest,
            total_principal,
        })
    }

    /// look up an installment by its 1-based period number
    pub fn row(&self, period: u32) -> Option<&RepaymentRow> {
        if period < 1 {
            return None;
        }
        self.rows.get((period - 1) as usize)
    }
}
