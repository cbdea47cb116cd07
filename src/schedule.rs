use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::terms::LoanTerms;
use crate::types::{InstallmentStatus, ScheduleMethod};

/// one scheduled payment obligation within a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    pub number: u32,
    pub due_date: NaiveDate,
    pub payment_amount: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub balance_after: Money,
    pub status: InstallmentStatus,
    pub paid_amount: Money,
    pub paid_date: Option<DateTime<Utc>>,
}

impl Installment {
    fn scheduled(
        number: u32,
        due_date: NaiveDate,
        payment_amount: Money,
        interest_portion: Money,
        principal_portion: Money,
        balance_after: Money,
    ) -> Self {
        Self {
            number,
            due_date,
            payment_amount,
            interest_portion,
            principal_portion,
            balance_after,
            status: InstallmentStatus::Pending,
            paid_amount: Money::ZERO,
            paid_date: None,
        }
    }

    /// amount still owed on this installment
    pub fn outstanding(&self) -> Money {
        (self.payment_amount - self.paid_amount).max(Money::ZERO)
    }
}

/// builds amortization schedules from loan terms
pub struct ScheduleBuilder {
    method: ScheduleMethod,
}

impl ScheduleBuilder {
    pub fn new(method: ScheduleMethod) -> Self {
        Self { method }
    }

    /// annuity schedule, the default for new loans
    pub fn french() -> Self {
        Self::new(ScheduleMethod::French)
    }

    /// build the full installment schedule.
    ///
    /// Non-positive principal or a zero term yields an empty schedule;
    /// callers must treat that as "could not be built", not as a
    /// zero-payment loan.
    pub fn build(&self, terms: &LoanTerms) -> Vec<Installment> {
        if !terms.principal.is_positive() || terms.term_count == 0 {
            return Vec::new();
        }

        match &self.method {
            ScheduleMethod::French => self.build_french(terms),
            ScheduleMethod::InterestOnly => self.build_interest_only(terms),
            ScheduleMethod::Flat => {
                let total_interest = terms.principal.percentage(terms.annual_rate);
                self.build_fixed_split(terms, total_interest, None)
            }
            ScheduleMethod::FixedProfit { target_profit } => {
                self.build_fixed_split(terms, *target_profit, None)
            }
            ScheduleMethod::FixedPayment { payment } => {
                let total_to_pay = *payment * Decimal::from(terms.term_count);
                let total_interest = total_to_pay - terms.principal;
                self.build_fixed_split(terms, total_interest, Some(*payment))
            }
        }
    }

    /// French/annuity method: one fixed payment, interest on the
    /// declining balance, rounded at each step. The payment is rounded
    /// once up front and reused unchanged for every row, so the final
    /// balance is clamped rather than re-solved.
    fn build_french(&self, terms: &LoanTerms) -> Vec<Installment> {
        let rate = terms.rate_per_period();
        let payment = annuity_payment(terms.principal, rate, terms.term_count);

        let mut schedule = Vec::with_capacity(terms.term_count as usize);
        let mut balance = terms.principal;
        let mut due_date = terms.start_date;

        for number in 1..=terms.term_count {
            due_date = due_date + Duration::days(terms.frequency.days_per_period());

            let interest = balance.percentage(rate);
            let principal_portion = payment - interest;

            balance = (balance - principal_portion).max(Money::ZERO);
            if number == terms.term_count {
                balance = Money::ZERO;
            }

            schedule.push(Installment::scheduled(
                number,
                due_date,
                payment,
                interest,
                principal_portion,
                balance,
            ));
        }

        schedule
    }

    /// every payment covers the period's interest; principal stays
    /// outstanding for the whole term
    fn build_interest_only(&self, terms: &LoanTerms) -> Vec<Installment> {
        let rate = terms.rate_per_period();
        let interest_payment = terms.principal.percentage(rate);

        let mut schedule = Vec::with_capacity(terms.term_count as usize);
        let mut due_date = terms.start_date;

        for number in 1..=terms.term_count {
            due_date = due_date + Duration::days(terms.frequency.days_per_period());

            schedule.push(Installment::scheduled(
                number,
                due_date,
                interest_payment,
                interest_payment,
                Money::ZERO,
                terms.principal,
            ));
        }

        schedule
    }

    /// flat-family schedules: a known total interest split evenly across
    /// the term. The last row is re-totaled so the schedule closes exactly.
    fn build_fixed_split(
        &self,
        terms: &LoanTerms,
        total_interest: Money,
        fixed_payment: Option<Money>,
    ) -> Vec<Installment> {
        let n = Decimal::from(terms.term_count);
        let total_to_pay = terms.principal + total_interest;
        let payment = fixed_payment.unwrap_or(total_to_pay / n);
        let interest = total_interest / n;
        let principal_portion = terms.principal / n;

        let mut schedule = Vec::with_capacity(terms.term_count as usize);
        let mut due_date = terms.start_date;

        for number in 1..=terms.term_count {
            due_date = due_date + Duration::days(terms.frequency.days_per_period());

            let mut row_payment = payment;
            let mut balance =
                (terms.principal - principal_portion * Decimal::from(number)).max(Money::ZERO);

            if number == terms.term_count {
                row_payment = total_to_pay - payment * Decimal::from(terms.term_count - 1);
                balance = Money::ZERO;
            }

            schedule.push(Installment::scheduled(
                number,
                due_date,
                row_payment,
                interest,
                principal_portion,
                balance,
            ));
        }

        schedule
    }
}

/// fixed annuity payment: P * r * (1 + r)^n / ((1 + r)^n - 1),
/// computed in full precision and rounded to the minor unit once
fn annuity_payment(principal: Money, rate_per_period: Rate, term_count: u32) -> Money {
    if rate_per_period.is_zero() {
        return principal / Decimal::from(term_count);
    }

    let r = rate_per_period.as_decimal();
    let base = Decimal::ONE + r;
    let mut compound = Decimal::ONE;
    for _ in 0..term_count {
        compound *= base;
    }

    let numerator = principal.as_decimal() * r * compound;
    let denominator = compound - Decimal::ONE;

    Money::from_decimal(numerator / denominator)
}

/// total projected interest across a schedule, computed once at
/// origination and stored on the loan
pub fn total_interest(schedule: &[Installment]) -> Money {
    schedule.iter().map(|i| i.interest_portion).sum()
}
