/// collection day - penalties, partial collections, and settlement
use chrono::NaiveDate;
use loan_servicing_rs::{
    EventStore, Loan, LoanTerms, Money, PaymentApplier, PaymentOptions, PenaltyConfig, Rate,
    SafeTimeProvider, ScheduleBuilder, TimeSource, Uuid,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let mut events = EventStore::new();

    // $1,000 at 0% over 4 weekly installments of 250
    let terms = LoanTerms::weekly(
        Money::from_major(1_000),
        Rate::ZERO,
        4,
        NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?,
    );
    let mut loan =
        Loan::originate(Uuid::new_v4(), terms, &ScheduleBuilder::french(), &mut events)?;

    // 5% late charge when the collector flags a payment
    let applier = PaymentApplier::new(PenaltyConfig::new(Rate::from_percentage(dec!(5))));

    // installment 1 on time
    loan = applier
        .apply(&loan, 1, &PaymentOptions::none(), &time, &mut events)?
        .loan;

    // installment 2 late, configured penalty applies
    let late = applier.apply(&loan, 2, &PaymentOptions::penalized(), &time, &mut events)?;
    println!("late collection: base {} penalty {}", late.receipt.amount, late.receipt.penalty);
    loan = late.loan;

    // client only has 100 on hand for installment 3
    let partial = applier.apply_custom(
        &loan,
        3,
        Money::from_major(100),
        &PaymentOptions::none(),
        &time,
        &mut events,
    )?;
    println!(
        "partial collection: {} received, {} still owed on installment 3",
        partial.receipt.amount, partial.receipt.remaining_on_installment,
    );
    loan = partial.loan;

    // the rest of installment 3, then installment 4 settles the loan
    loan = applier
        .apply_custom(&loan, 3, Money::from_major(150), &PaymentOptions::none(), &time, &mut events)?
        .loan;
    loan = applier
        .apply(&loan, 4, &PaymentOptions::none(), &time, &mut events)?
        .loan;

    println!("loan settled: {}", loan.is_settled());
    println!("progress: {}%", loan.progress_percent());
    println!("total collected: {}", loan.total_paid);

    for event in events.take_events() {
        println!("event: {event:?}");
    }

    Ok(())
}
