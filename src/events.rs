use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::LoanId;

/// all events that can be emitted by servicing operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    LoanOriginated {
        loan_id: LoanId,
        principal: Money,
        total_interest: Money,
        term_count: u32,
    },
    PaymentReceived {
        loan_id: LoanId,
        installment_number: u32,
        amount: Money,
        penalty: Money,
        timestamp: DateTime<Utc>,
    },
    PartialPaymentReceived {
        loan_id: LoanId,
        installment_number: u32,
        amount: Money,
        outstanding: Money,
        timestamp: DateTime<Utc>,
    },
    PenaltyCharged {
        loan_id: LoanId,
        installment_number: u32,
        amount: Money,
        timestamp: DateTime<Utc>,
    },
    LoanSettled {
        loan_id: LoanId,
        total_paid: Money,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
