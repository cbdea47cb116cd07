pub mod decimal;
pub mod errors;
pub mod events;
pub mod loan;
pub mod payments;
pub mod schedule;
pub mod terms;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{Result, ServicingError};
pub use events::{Event, EventStore};
pub use loan::Loan;
pub use payments::{PaymentApplier, PaymentOptions, PaymentOutcome, PenaltyConfig, Receipt};
pub use schedule::{total_interest, Installment, ScheduleBuilder};
pub use terms::LoanTerms;
pub use types::{ClientId, Frequency, InstallmentStatus, LoanId, LoanStatus, ScheduleMethod};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
