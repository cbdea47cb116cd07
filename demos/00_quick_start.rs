/// quick start - originate a loan and collect the first installment
use chrono::NaiveDate;
use loan_servicing_rs::{
    EventStore, Loan, LoanTerms, Money, PaymentApplier, PaymentOptions, PenaltyConfig, Rate,
    SafeTimeProvider, ScheduleBuilder, TimeSource, Uuid,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let mut events = EventStore::new();

    // $10,000 at 12% annual over 12 monthly installments
    let terms = LoanTerms::monthly(
        Money::from_major(10_000),
        Rate::from_percentage(dec!(12)),
        12,
        NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?,
    );

    let loan = Loan::originate(Uuid::new_v4(), terms, &ScheduleBuilder::french(), &mut events)?;

    println!("projected interest: {}", loan.total_interest);
    for row in &loan.schedule {
        println!(
            "#{:>2}  {}  payment {}  interest {}  principal {}  balance {}",
            row.number,
            row.due_date,
            row.payment_amount,
            row.interest_portion,
            row.principal_portion,
            row.balance_after,
        );
    }

    // collect the first installment
    let applier = PaymentApplier::new(PenaltyConfig::default());
    let outcome = applier.apply(&loan, 1, &PaymentOptions::none(), &time, &mut events)?;

    println!(
        "collected {} on installment #{}; remaining balance {}",
        outcome.receipt.amount, outcome.receipt.installment_number, outcome.receipt.remaining_balance,
    );
    println!("{}", serde_json::to_string_pretty(&outcome.receipt)?);

    Ok(())
}
