pub mod generator;
pub mod pmt;

pub use generator::RepaymentSchedule;
pub use pmt::compute_pmt;
