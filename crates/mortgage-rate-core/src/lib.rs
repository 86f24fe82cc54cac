pub mod amortization;
pub mod error;
pub mod rate_table;
pub mod report;
pub mod types;

pub use error::MortgageRateError;
pub use types::*;

/// Standard result type for all mortgage-rate operations
pub type MortgageRateResult<T> = Result<T, MortgageRateError>;
