pub mod apply;
pub mod penalty;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::LoanId;

pub use apply::{PaymentApplier, PaymentOutcome};
pub use penalty::PenaltyConfig;

/// options for registering a payment
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentOptions {
    pub with_penalty: bool,
    pub penalty_override: Option<Money>,
}

impl PaymentOptions {
    /// plain payment, no late charge
    pub fn none() -> Self {
        Self::default()
    }

    /// charge the configured penalty rate
    pub fn penalized() -> Self {
        Self {
            with_penalty: true,
            penalty_override: None,
        }
    }

    /// charge an explicit penalty amount instead of the configured rate
    pub fn penalized_with(amount: Money) -> Self {
        Self {
            with_penalty: true,
            penalty_override: Some(amount),
        }
    }
}

/// immutable record of a single payment event, for the caller to persist
/// alongside the updated loan in one transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub loan_id: LoanId,
    pub installment_number: u32,
    pub installment_due_date: NaiveDate,
    /// base amount collected, excluding penalty
    pub amount: Money,
    pub penalty: Money,
    pub with_penalty: bool,
    pub loan_principal: Money,
    pub total_paid_after: Money,
    pub remaining_balance: Money,
    pub is_partial: bool,
    /// what is still owed on the installment after this collection
    pub remaining_on_installment: Money,
    pub full_installment_amount: Money,
    pub paid_at: DateTime<Utc>,
}
