use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// late-charge configuration: a percentage of the scheduled payment,
/// charged when the collector flags a payment as penalized
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PenaltyConfig {
    pub rate: Rate,
}

impl PenaltyConfig {
    pub fn new(rate: Rate) -> Self {
        Self { rate }
    }

    /// penalty for a scheduled payment; an explicit override wins over
    /// the configured rate
    pub fn penalty_for(&self, payment: Money, penalty_override: Option<Money>) -> Money {
        match penalty_override {
            Some(amount) => amount,
            None => payment.percentage(self.rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_penalty_from_rate() {
        let config = PenaltyConfig::new(Rate::from_percentage(dec!(10)));
        let payment = Money::from_str_exact("888.49").unwrap();

        assert_eq!(
            config.penalty_for(payment, None),
            Money::from_str_exact("88.85").unwrap()
        );
    }

    #[test]
    fn test_override_wins() {
        let config = PenaltyConfig::new(Rate::from_percentage(dec!(10)));
        let payment = Money::from_major(250);

        assert_eq!(
            config.penalty_for(payment, Some(Money::from_major(50))),
            Money::from_major(50)
        );
    }

    #[test]
    fn test_zero_rate_means_no_penalty() {
        let config = PenaltyConfig::default();
        assert_eq!(config.penalty_for(Money::from_major(250), None), Money::ZERO);
    }
}
