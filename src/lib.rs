pub mod decimal;
pub mod errors;
pub mod schedule;
pub mod store;
pub mod types;
pub mod validation;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use schedule::{compute_pmt, RepaymentSchedule};
pub use store::{LoanFilter, LoanStore, LoanView};
pub use types::{Loan, LoanId, LoanTerms, RepaymentRow};
pub use validation::LoanApplication;

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
