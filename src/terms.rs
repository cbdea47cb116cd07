use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ServicingError};
use crate::types::Frequency;

/// immutable loan terms supplied at origination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_count: u32,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
}

impl LoanTerms {
    pub fn new(
        principal: Money,
        annual_rate: Rate,
        term_count: u32,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            term_count,
            frequency,
            start_date,
        }
    }

    pub fn monthly(principal: Money, annual_rate: Rate, term_count: u32, start_date: NaiveDate) -> Self {
        Self::new(principal, annual_rate, term_count, Frequency::Monthly, start_date)
    }

    pub fn biweekly(principal: Money, annual_rate: Rate, term_count: u32, start_date: NaiveDate) -> Self {
        Self::new(principal, annual_rate, term_count, Frequency::Biweekly, start_date)
    }

    pub fn weekly(principal: Money, annual_rate: Rate, term_count: u32, start_date: NaiveDate) -> Self {
        Self::new(principal, annual_rate, term_count, Frequency::Weekly, start_date)
    }

    pub fn daily(principal: Money, annual_rate: Rate, term_count: u32, start_date: NaiveDate) -> Self {
        Self::new(principal, annual_rate, term_count, Frequency::Daily, start_date)
    }

    /// check the terms describe a loan that can be scheduled
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_positive() {
            return Err(ServicingError::InvalidTerms {
                message: "principal must be greater than zero".to_string(),
            });
        }

        if self.term_count == 0 {
            return Err(ServicingError::InvalidTerms {
                message: "term must be at least one installment".to_string(),
            });
        }

        if self.annual_rate.is_negative() {
            return Err(ServicingError::InvalidTerms {
                message: "interest rate cannot be negative".to_string(),
            });
        }

        Ok(())
    }

    /// periodic rate derived from the annual rate and payment cadence
    pub fn rate_per_period(&self) -> Rate {
        self.annual_rate.per_period(self.frequency.periods_per_year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_valid_terms() {
        let terms = LoanTerms::monthly(
            Money::from_major(10_000),
            Rate::from_percentage(dec!(12)),
            12,
            start(),
        );
        assert!(terms.validate().is_ok());
        assert_eq!(terms.rate_per_period().as_decimal(), dec!(0.01));
    }

    #[test]
    fn test_rejects_non_positive_principal() {
        let terms = LoanTerms::monthly(Money::ZERO, Rate::from_percentage(dec!(12)), 12, start());
        assert!(matches!(
            terms.validate(),
            Err(ServicingError::InvalidTerms { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_term() {
        let terms = LoanTerms::weekly(Money::from_major(500), Rate::ZERO, 0, start());
        assert!(terms.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_rate() {
        let terms = LoanTerms::monthly(
            Money::from_major(500),
            Rate::from_percentage(dec!(-1)),
            6,
            start(),
        );
        assert!(terms.validate().is_err());
    }

    #[test]
    fn test_zero_rate_is_valid() {
        let terms = LoanTerms::weekly(Money::from_major(1_000), Rate::ZERO, 4, start());
        assert!(terms.validate().is_ok());
    }
}
