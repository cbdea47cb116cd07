use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{Result, ServicingError};
use crate::events::{Event, EventStore};
use crate::schedule::{total_interest, Installment, ScheduleBuilder};
use crate::terms::LoanTerms;
use crate::types::{ClientId, InstallmentStatus, LoanId, LoanStatus};

/// loan aggregate: terms, schedule, running totals.
///
/// Created once from terms; after that the schedule and totals change
/// only through the payment applier, which returns a new value instead
/// of mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub client_id: ClientId,
    pub terms: LoanTerms,
    pub status: LoanStatus,
    pub total_paid: Money,
    pub total_interest: Money,
    pub schedule: Vec<Installment>,
}

impl Loan {
    /// originate a loan: validate terms, build the schedule, and compute
    /// the projected interest once
    pub fn originate(
        client_id: ClientId,
        terms: LoanTerms,
        builder: &ScheduleBuilder,
        events: &mut EventStore,
    ) -> Result<Self> {
        terms.validate()?;

        let schedule = builder.build(&terms);
        if schedule.is_empty() {
            return Err(ServicingError::InvalidTerms {
                message: "schedule could not be built from the given terms".to_string(),
            });
        }

        let total_interest = total_interest(&schedule);
        let loan = Self {
            id: Uuid::new_v4(),
            client_id,
            terms,
            status: LoanStatus::Active,
            total_paid: Money::ZERO,
            total_interest,
            schedule,
        };

        events.emit(Event::LoanOriginated {
            loan_id: loan.id,
            principal: loan.terms.principal,
            total_interest,
            term_count: loan.terms.term_count,
        });

        Ok(loan)
    }

    /// look up an installment by its 1-indexed number
    pub fn installment(&self, number: u32) -> Option<&Installment> {
        self.schedule.iter().find(|i| i.number == number)
    }

    /// first installment not yet fully collected
    pub fn next_pending(&self) -> Option<&Installment> {
        self.schedule
            .iter()
            .find(|i| i.status != InstallmentStatus::Paid)
    }

    /// share of installments fully collected, 0-100
    pub fn progress_percent(&self) -> u32 {
        if self.schedule.is_empty() {
            return 0;
        }

        let paid = self
            .schedule
            .iter()
            .filter(|i| i.status == InstallmentStatus::Paid)
            .count();
        let total = self.schedule.len();

        ((paid * 100 + total / 2) / total) as u32
    }

    /// installments not fully collected with a due date before `as_of`
    pub fn overdue_count(&self, as_of: NaiveDate) -> usize {
        self.schedule
            .iter()
            .filter(|i| i.status != InstallmentStatus::Paid && i.due_date < as_of)
            .count()
    }

    /// principal plus projected interest still owed
    pub fn payoff_amount(&self) -> Money {
        (self.terms.principal + self.total_interest - self.total_paid).max(Money::ZERO)
    }

    pub fn is_settled(&self) -> bool {
        self.status == LoanStatus::Paid
    }
}
