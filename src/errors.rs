use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServicingError {
    #[error("invalid loan terms: {message}")]
    InvalidTerms { message: String },

    #[error("installment not found: {number}")]
    InstallmentNotFound { number: u32 },

    #[error("installment already paid: {number}")]
    AlreadyPaid { number: u32 },

    #[error("invalid payment amount: {amount}")]
    InvalidPaymentAmount { amount: Money },
}

pub type Result<T> = std::result::Result<T, ServicingError>;
