use std::collections::HashMap;

use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::schedule::RepaymentSchedule;
use crate::types::{Loan, LoanId, RepaymentRow};
use crate::validation::{self, LoanApplication};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoanEntry {
    loan: Loan,
    schedule: RepaymentSchedule,
}

/// In-memory store of loans and their repayment schedules.
///
/// Every create or update runs the full pipeline (validate, derive payment,
/// generate schedule) before the map is touched, so no reader ever observes
/// a loan with a partial or stale schedule.
#[derive(Debug, Default)]
pub struct LoanStore {
    loans: HashMap<LoanId, LoanEntry>,
}

impl LoanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }

    /// validate an application, generate its schedule, and store the loan
    pub fn create(
        &mut self,
        application: &LoanApplication,
        time: &SafeTimeProvider,
    ) -> Result<LoanId> {
        let terms = validation::validate(application)?;
        let schedule = RepaymentSchedule::build(&terms)?;

        let id = Uuid::new_v4();
        let now = time.now();
        let loan = Loan {
            id,
            terms,
            payment: schedule.payment,
            created_at: now,
            updated_at: now,
        };

        self.loans.insert(id, LoanEntry { loan, schedule });
        Ok(id)
    }

    /// re-validate and regenerate, replacing the prior schedule wholesale
    pub fn update(
        &mut self,
        id: LoanId,
        application: &LoanApplication,
        time: &SafeTimeProvider,
    ) -> Result<()> {
        if !self.loans.contains_key(&id) {
            return Err(LoanError::LoanNotFound { id });
        }

        let terms = validation::validate(application)?;
        let schedule = RepaymentSchedule::build(&terms)?;

        let entry = self.loans.get_mut(&id).ok_or(LoanError::LoanNotFound { id })?;
        entry.loan.terms = terms;
        entry.loan.payment = schedule.payment;
        entry.loan.updated_at = time.now();
        entry.schedule = schedule;
        Ok(())
    }

    pub fn get(&self, id: LoanId) -> Option<&Loan> {
        self.loans.get(&id).map(|e| &e.loan)
    }

    pub fn schedule(&self, id: LoanId) -> Option<&RepaymentSchedule> {
        self.loans.get(&id).map(|e| &e.schedule)
    }

    /// all loans, oldest first
    pub fn list(&self) -> Vec<&Loan> {
        let mut loans: Vec<&Loan> = self.loans.values().map(|e| &e.loan).collect();
        loans.sort_by_key(|l| (l.created_at, l.id));
        loans
    }

    /// loans whose amount, term, and rate fall inside the criteria bounds,
    /// oldest first
    pub fn filter(&self, criteria: &LoanFilter) -> Vec<&Loan> {
        let principal_lower = criteria.principal_lower.unwrap_or(validation::MIN_PRINCIPAL);
        let principal_upper = criteria.principal_upper.unwrap_or(validation::MAX_PRINCIPAL);
        let term_lower = criteria.term_years_lower.unwrap_or(validation::MIN_TERM_YEARS);
        let term_upper = criteria.term_years_upper.unwrap_or(validation::MAX_TERM_YEARS);
        let rate_lower = criteria.rate_percent_lower.unwrap_or(validation::MIN_RATE_PERCENT);
        let rate_upper = criteria.rate_percent_upper.unwrap_or(validation::MAX_RATE_PERCENT);

        let mut loans: Vec<&Loan> = self
            .loans
            .values()
            .map(|e| &e.loan)
            .filter(|l| {
                let principal = l.terms.principal.as_decimal();
                let rate = l.terms.annual_rate.as_percentage();
                principal >= principal_lower
                    && principal <= principal_upper
                    && l.terms.term_years >= term_lower
                    && l.terms.term_years <= term_upper
                    && rate >= rate_lower
                    && rate <= rate_upper
            })
            .collect();
        loans.sort_by_key(|l| (l.created_at, l.id));
        loans
    }

    /// remove a loan and its schedule rows together
    pub fn remove(&mut self, id: LoanId) -> Result<()> {
        self.loans
            .remove(&id)
            .map(|_| ())
            .ok_or(LoanError::LoanNotFound { id })
    }

    /// serializable view of a stored loan
    pub fn view(&self, id: LoanId) -> Result<LoanView> {
        let entry = self.loans.get(&id).ok_or(LoanError::LoanNotFound { id })?;
        Ok(LoanView::from_entry(&entry.loan, &entry.schedule))
    }
}

/// Inclusive bounds for filtering stored loans. Unset bounds fall back to
/// the acceptable business ranges, so a default filter matches every loan.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoanFilter {
    pub principal_lower: Option<Decimal>,
    pub principal_upper: Option<Decimal>,
    pub term_years_lower: Option<u32>,
    pub term_years_upper: Option<u32>,
    /// annual rate bound in percent
    pub rate_percent_lower: Option<Decimal>,
    pub rate_percent_upper: Option<Decimal>,
}

/// serializable view of a loan and its schedule
#[derive(Debug, Serialize, Deserialize)]
pub struct LoanView {
    pub id: LoanId,
    pub principal: Money,
    pub interest_rate_percent: Decimal,
    pub term_years: u32,
    pub start_month: u32,
    pub start_year: i32,
    pub payment: Money,
    pub total_interest: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub schedule: Vec<RepaymentRow>,
}

impl LoanView {
    fn from_entry(loan: &Loan, schedule: &RepaymentSchedule) -> Self {
        LoanView {
            id: loan.id,
            principal: loan.terms.principal,
            interest_rate_percent: loan.terms.annual_rate.as_percentage(),
            term_years: loan.terms.term_years,
            start_month: loan.terms.start_month,
            start_year: loan.terms.start_year,
            payment: loan.payment,
            total_interest: schedule.total_interest,
            created_at: loan.created_at,
            updated_at: loan.updated_at,
            schedule: schedule.rows.clone(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
