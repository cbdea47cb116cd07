use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;

use crate::decimal::Money;
use crate::errors::{Result, ServicingError};
use crate::events::{Event, EventStore};
use crate::loan::Loan;
use crate::types::{InstallmentStatus, LoanStatus};

use super::{PaymentOptions, PenaltyConfig, Receipt};

/// applies payments to installments and recomputes loan-level aggregates.
///
/// Operations never mutate their inputs: each returns a fresh loan and a
/// receipt for the caller to persist in one transaction.
pub struct PaymentApplier {
    penalty_config: PenaltyConfig,
}

/// result of a payment application
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOutcome {
    pub loan: Loan,
    pub receipt: Receipt,
}

impl PaymentApplier {
    pub fn new(penalty_config: PenaltyConfig) -> Self {
        Self { penalty_config }
    }

    /// register the scheduled payment for an installment.
    ///
    /// The base amount is always the installment's scheduled
    /// `payment_amount`; operator-entered amounts go through
    /// `apply_custom` instead.
    pub fn apply(
        &self,
        loan: &Loan,
        installment_number: u32,
        options: &PaymentOptions,
        time_provider: &SafeTimeProvider,
        events: &mut EventStore,
    ) -> Result<PaymentOutcome> {
        let index = self.locate(loan, installment_number)?;
        let base = loan.schedule[index].payment_amount;

        // the scheduled amount settles the row outright, replacing any
        // earlier partial collection
        self.settle(loan, index, base, base, options, time_provider.now(), events)
    }

    /// register an operator-entered amount against an installment.
    ///
    /// Collections accumulate on the installment; the row flips to Paid
    /// once the accumulated amount reaches the scheduled payment and
    /// stays Partial until then.
    pub fn apply_custom(
        &self,
        loan: &Loan,
        installment_number: u32,
        amount: Money,
        options: &PaymentOptions,
        time_provider: &SafeTimeProvider,
        events: &mut EventStore,
    ) -> Result<PaymentOutcome> {
        if !amount.is_positive() {
            return Err(ServicingError::InvalidPaymentAmount { amount });
        }

        let index = self.locate(loan, installment_number)?;
        let new_paid_amount = loan.schedule[index].paid_amount + amount;

        self.settle(loan, index, amount, new_paid_amount, options, time_provider.now(), events)
    }

    fn locate(&self, loan: &Loan, number: u32) -> Result<usize> {
        let index = loan
            .schedule
            .iter()
            .position(|i| i.number == number)
            .ok_or(ServicingError::InstallmentNotFound { number })?;

        if loan.schedule[index].status == InstallmentStatus::Paid {
            return Err(ServicingError::AlreadyPaid { number });
        }

        Ok(index)
    }

    fn settle(
        &self,
        loan: &Loan,
        index: usize,
        collected: Money,
        new_paid_amount: Money,
        options: &PaymentOptions,
        now: DateTime<Utc>,
        events: &mut EventStore,
    ) -> Result<PaymentOutcome> {
        let scheduled = loan.schedule[index].payment_amount;

        // penalty is always a charge on the scheduled payment, even when
        // the collected amount differs
        let penalty = if options.with_penalty {
            self.penalty_config
                .penalty_for(scheduled, options.penalty_override)
        } else {
            Money::ZERO
        };
        if penalty.is_negative() {
            return Err(ServicingError::InvalidPaymentAmount { amount: penalty });
        }

        let total_payment = collected + penalty;
        let new_total_paid = loan.total_paid + total_payment;

        // against the original principal plus projected interest, not the
        // schedule's per-row balances
        let remaining_balance =
            (loan.terms.principal + loan.total_interest - new_total_paid).max(Money::ZERO);

        let fully_paid = new_paid_amount >= scheduled;

        let mut updated = loan.clone();
        {
            let row = &mut updated.schedule[index];
            row.status = if fully_paid {
                InstallmentStatus::Paid
            } else {
                InstallmentStatus::Partial
            };
            row.paid_amount = new_paid_amount;
            row.paid_date = Some(now);
        }
        updated.total_paid = new_total_paid;

        let all_paid = updated
            .schedule
            .iter()
            .all(|i| i.status == InstallmentStatus::Paid);
        updated.status = if all_paid {
            LoanStatus::Paid
        } else {
            LoanStatus::Active
        };

        let installment_number = updated.schedule[index].number;
        let remaining_on_installment = (scheduled - new_paid_amount).max(Money::ZERO);

        if fully_paid {
            events.emit(Event::PaymentReceived {
                loan_id: loan.id,
                installment_number,
                amount: collected,
                penalty,
                timestamp: now,
            });
        } else {
            events.emit(Event::PartialPaymentReceived {
                loan_id: loan.id,
                installment_number,
                amount: collected,
                outstanding: remaining_on_installment,
                timestamp: now,
            });
        }
        if penalty.is_positive() {
            events.emit(Event::PenaltyCharged {
                loan_id: loan.id,
                installment_number,
                amount: penalty,
                timestamp: now,
            });
        }
        if all_paid {
            events.emit(Event::LoanSettled {
                loan_id: loan.id,
                total_paid: new_total_paid,
                timestamp: now,
            });
        }

        let receipt = Receipt {
            loan_id: loan.id,
            installment_number,
            installment_due_date: updated.schedule[index].due_date,
            amount: collected,
            penalty,
            with_penalty: options.with_penalty,
            loan_principal: loan.terms.principal,
            total_paid_after: new_total_paid,
            remaining_balance,
            is_partial: !fully_paid,
            remaining_on_installment,
            full_installment_amount: scheduled,
            paid_at: now,
        };

        Ok(PaymentOutcome {
            loan: updated,
            receipt,
        })
    }
}
