use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;

/// unique identifier for a loan
pub type LoanId = Uuid;

/// unique identifier for a client
pub type ClientId = Uuid;

/// payment cadence for a loan schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    /// number of payment periods in a year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Daily => 365,
            Frequency::Weekly => 52,
            Frequency::Biweekly => 24,
            Frequency::Monthly => 12,
        }
    }

    /// days to advance the due date per period. Months roll as fixed
    /// 30-day steps from the start date, not calendar months.
    pub fn days_per_period(&self) -> i64 {
        match self {
            Frequency::Daily => 1,
            Frequency::Weekly => 7,
            Frequency::Biweekly => 15,
            Frequency::Monthly => 30,
        }
    }
}

/// installment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallmentStatus {
    /// not yet collected
    Pending,
    /// partially collected via a custom-amount payment
    Partial,
    /// fully collected; terminal
    Paid,
}

/// loan status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    /// at least one installment outstanding
    Active,
    /// every installment collected; terminal
    Paid,
}

/// schedule calculation method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScheduleMethod {
    /// fixed annuity payment, interest on declining balance
    French,
    /// every payment covers interest only, principal stays outstanding
    InterestOnly,
    /// simple interest on the full principal, split evenly across the term
    Flat,
    /// the lender names an absolute profit amount instead of a rate
    FixedProfit { target_profit: Money },
    /// the lender names the exact per-period payment
    FixedPayment { payment: Money },
}
