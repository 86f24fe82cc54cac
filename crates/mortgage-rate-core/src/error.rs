use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MortgageRateError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error(
        "Monthly payment {payment} is outside the tabulated range [{lowest}, {highest}]"
    )]
    PaymentOutOfRange {
        payment: Decimal,
        lowest: Decimal,
        highest: Decimal,
    },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for MortgageRateError {
    fn from(e: serde_json::Error) -> Self {
        MortgageRateError::SerializationError(e.to_string())
    }
}
