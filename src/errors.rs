use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::types::LoanId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("principal must be positive: {amount}")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("term must be at least one year: {years}")]
    InvalidTerm {
        years: u32,
    },

    #[error("interest rate cannot be negative: {rate}")]
    NegativeRate {
        rate: Rate,
    },

    #[error("payment formula is undefined at zero interest rate")]
    ZeroRate,

    #[error("start month must be 1-12: {month}")]
    InvalidStartMonth {
        month: u32,
    },

    #[error("due date out of calendar range: year {year}, month {month}")]
    DateOutOfRange {
        year: i32,
        month: u32,
    },

    #[error("loan amount {amount} outside acceptable range {min} - {max}")]
    PrincipalOutOfRange {
        amount: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("loan term {years} years outside acceptable range {min} - {max}")]
    TermOutOfRange {
        years: u32,
        min: u32,
        max: u32,
    },

    #[error("interest rate {percent}% outside acceptable range {min}% - {max}%")]
    RateOutOfRange {
        percent: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("start year {year} outside acceptable range {min} - {max}")]
    StartYearOutOfRange {
        year: i32,
        min: i32,
        max: i32,
    },

    #[error("loan not found: {id}")]
    LoanNotFound {
        id: LoanId,
    },
}

pub type Result<T> = std::result::Result<T, LoanError>;
