use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

/// unique identifier for a loan
pub type LoanId = Uuid;

/// validated terms of a fixed-rate loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    /// nominal annual rate as a fraction (0.10 for 10%)
    pub annual_rate: Rate,
    pub term_years: u32,
    /// calendar month of origination, 1-12
    pub start_month: u32,
    pub start_year: i32,
}

impl LoanTerms {
    /// number of monthly installments over the full term
    pub fn total_periods(&self) -> u32 {
        // saturate rather than overflow on terms far past the validated cap
        self.term_years.saturating_mul(12)
    }

    /// due date for a 1-based period: first of month, offset from the
    /// start date by `period` months
    pub fn due_date(&self, period: u32) -> Result<NaiveDate> {
        if self.start_month < 1 || self.start_month > 12 {
            return Err(LoanError::InvalidStartMonth {
                month: self.start_month,
            });
        }
        let months = (self.start_month - 1 + period) as i32;
        let year = self.start_year + months.div_euclid(12);
        let month = (months.rem_euclid(12) + 1) as u32;
        NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(LoanError::DateOutOfRange { year, month })
    }
}

/// one installment of a repayment schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepaymentRow {
    /// 1-based position within the schedule
    pub period: u32,
    pub due_date: NaiveDate,
    pub payment_amount: Money,
    pub principal: Money,
    pub interest: Money,
    /// outstanding balance after this installment is applied
    pub balance: Money,
}

/// stored loan record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub terms: LoanTerms,
    /// constant monthly payment derived from the terms
    pub payment: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
