use super::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The business figures a prospect enters into the calculator.
///
/// Owned by the caller and recomputed on every change. Monetary fields are expected
/// to be non-negative; run [`CalculatorInputs::sanitized`] on anything that came
/// from user text before handing it to an estimator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorInputs {
    /// Gross monthly value transacted (GMV).
    pub transaction_volume: Money,
    /// Total employees.
    pub headcount: u32,
    /// Employees who travel. Ignored by policies that derive it from headcount.
    pub traveler_count: u32,
    /// Flat monthly subscription assumed for the competitor.
    pub competitor_monthly_fee: Money,
    /// Competitor fee charged per travel need.
    pub competitor_per_need_fee: Money,
    /// Replace the competitor fee fields with industry averages.
    pub use_default_estimates: bool,
}

impl CalculatorInputs {
    pub fn new(transaction_volume: Decimal, headcount: u32) -> Self {
        Self {
            transaction_volume: Money::new(transaction_volume),
            headcount,
            ..Self::default()
        }
    }

    pub fn with_travelers(mut self, traveler_count: u32) -> Self {
        self.traveler_count = traveler_count;
        self
    }

    pub fn with_competitor_fees(mut self, monthly_fee: Decimal, per_need_fee: Decimal) -> Self {
        self.competitor_monthly_fee = Money::new(monthly_fee);
        self.competitor_per_need_fee = Money::new(per_need_fee);
        self
    }

    pub fn with_default_estimates(mut self, use_default_estimates: bool) -> Self {
        self.use_default_estimates = use_default_estimates;
        self
    }

    /// Clamps every monetary field to zero or above.
    pub fn sanitized(self) -> Self {
        Self {
            transaction_volume: Money::non_negative(self.transaction_volume.value()),
            competitor_monthly_fee: Money::non_negative(self.competitor_monthly_fee.value()),
            competitor_per_need_fee: Money::non_negative(self.competitor_per_need_fee.value()),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_sets_fields() {
        let inputs = CalculatorInputs::new(dec!(1000), 10)
            .with_travelers(4)
            .with_competitor_fees(dec!(300), dec!(15))
            .with_default_estimates(true);

        assert_eq!(inputs.transaction_volume, Money::new(dec!(1000)));
        assert_eq!(inputs.headcount, 10);
        assert_eq!(inputs.traveler_count, 4);
        assert_eq!(inputs.competitor_monthly_fee, Money::new(dec!(300)));
        assert_eq!(inputs.competitor_per_need_fee, Money::new(dec!(15)));
        assert!(inputs.use_default_estimates);
    }

    #[test]
    fn test_sanitized_clamps_negative_amounts() {
        let inputs = CalculatorInputs::new(dec!(-1), 3).with_competitor_fees(dec!(-50), dec!(2));
        let clean = inputs.sanitized();

        assert_eq!(clean.transaction_volume, Money::ZERO);
        assert_eq!(clean.competitor_monthly_fee, Money::ZERO);
        assert_eq!(clean.competitor_per_need_fee, Money::new(dec!(2)));
        assert_eq!(clean.headcount, 3);
    }
}
