use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::types::LoanTerms;

/// acceptable loan amount range
pub const MIN_PRINCIPAL: Decimal = dec!(1000);
pub const MAX_PRINCIPAL: Decimal = dec!(100000000);

/// acceptable term range in years
pub const MIN_TERM_YEARS: u32 = 1;
pub const MAX_TERM_YEARS: u32 = 50;

/// acceptable annual rate range in percent
pub const MIN_RATE_PERCENT: Decimal = dec!(1);
pub const MAX_RATE_PERCENT: Decimal = dec!(36);

/// acceptable start year range
pub const MIN_START_YEAR: i32 = 2017;
pub const MAX_START_YEAR: i32 = 2050;

/// raw loan request as supplied by a caller, before range checks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub principal: Decimal,
    /// annual rate in percent (e.g. 10 for 10%)
    pub interest_rate_percent: Decimal,
    pub term_years: u32,
    pub start_month: u32,
    pub start_year: i32,
}

/// Check an application against the acceptable business ranges and turn it
/// into validated terms, converting the percent rate to a fraction.
pub fn validate(application: &LoanApplication) -> Result<LoanTerms> {
    if application.principal < MIN_PRINCIPAL || application.principal > MAX_PRINCIPAL {
        return Err(LoanError::PrincipalOutOfRange {
            amount: application.principal,
            min: MIN_PRINCIPAL,
            max: MAX_PRINCIPAL,
        });
    }

    if application.term_years < MIN_TERM_YEARS || application.term_years > MAX_TERM_YEARS {
        return Err(LoanError::TermOutOfRange {
            years: application.term_years,
            min: MIN_TERM_YEARS,
            max: MAX_TERM_YEARS,
        });
    }

    if application.interest_rate_percent < MIN_RATE_PERCENT
        || application.interest_rate_percent > MAX_RATE_PERCENT
    {
        return Err(LoanError::RateOutOfRange {
            percent: application.interest_rate_percent,
            min: MIN_RATE_PERCENT,
            max: MAX_RATE_PERCENT,
        });
    }

    if application.start_year < MIN_START_YEAR || application.start_year > MAX_START_YEAR {
        return Err(LoanError::StartYearOutOfRange {
            year: application.start_year,
            min: MIN_START_YEAR,
            max: MAX_START_YEAR,
        });
    }

    if application.start_month < 1 || application.start_month > 12 {
        return Err(LoanError::InvalidStartMonth {
            month: application.start_month,
        });
    }

    Ok(LoanTerms {
        principal: Money::from_decimal(application.principal),
        annual_rate: Rate::from_percentage(application.interest_rate_percent),
        term_years: application.term_years,
        start_month: application.start_month,
        start_year: application.start_year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application() -> LoanApplication {
        LoanApplication {
            principal: dec!(10000),
            interest_rate_percent: dec!(10),
            term_years: 1,
            start_month: 1,
            start_year: 2024,
        }
    }

    #[test]
    fn test_valid_application_converts_rate_to_fraction() {
        let terms = validate(&application()).unwrap();
        assert_eq!(terms.annual_rate, Rate::from_decimal(dec!(0.1)));
        assert_eq!(terms.principal, Money::from_major(10_000));
    }

    #[test]
    fn test_principal_bounds() {
        let mut app = application();
        app.principal = dec!(999.999999);
        assert!(matches!(
            validate(&app).unwrap_err(),
            LoanError::PrincipalOutOfRange { .. }
        ));

        app.principal = dec!(100000000.000001);
        assert!(matches!(
            validate(&app).unwrap_err(),
            LoanError::PrincipalOutOfRange { .. }
        ));

        app.principal = MIN_PRINCIPAL;
        assert!(validate(&app).is_ok());
        app.principal = MAX_PRINCIPAL;
        assert!(validate(&app).is_ok());
    }

    #[test]
    fn test_term_bounds() {
        let mut app = application();
        app.term_years = 0;
        assert!(matches!(
            validate(&app).unwrap_err(),
            LoanError::TermOutOfRange { .. }
        ));

        app.term_years = 51;
        assert!(matches!(
            validate(&app).unwrap_err(),
            LoanError::TermOutOfRange { .. }
        ));

        app.term_years = 50;
        assert!(validate(&app).is_ok());
    }

    #[test]
    fn test_rate_bounds() {
        let mut app = application();
        app.interest_rate_percent = dec!(0.5);
        assert!(matches!(
            validate(&app).unwrap_err(),
            LoanError::RateOutOfRange { .. }
        ));

        app.interest_rate_percent = dec!(36.5);
        assert!(matches!(
            validate(&app).unwrap_err(),
            LoanError::RateOutOfRange { .. }
        ));

        app.interest_rate_percent = dec!(36);
        assert!(validate(&app).is_ok());
    }

    #[test]
    fn test_start_date_bounds() {
        let mut app = application();
        app.start_year = 2016;
        assert!(matches!(
            validate(&app).unwrap_err(),
            LoanError::StartYearOutOfRange { .. }
        ));

        app.start_year = 2051;
        assert!(matches!(
            validate(&app).unwrap_err(),
            LoanError::StartYearOutOfRange { .. }
        ));

        app.start_year = 2024;
        app.start_month = 0;
        assert_eq!(
            validate(&app).unwrap_err(),
            LoanError::InvalidStartMonth { month: 0 }
        );
        app.start_month = 13;
        assert_eq!(
            validate(&app).unwrap_err(),
            LoanError::InvalidStartMonth { month: 13 }
        );
    }
}
