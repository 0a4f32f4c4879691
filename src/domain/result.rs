use super::money::Money;
use serde::Serialize;

/// Monthly cost comparison derived from one set of [`CalculatorInputs`].
///
/// Built only through [`CalculationResult::priced`] or
/// [`CalculationResult::specialist_review`], so `monthly_savings` is always exactly
/// `competitor_monthly_cost - platform_monthly_cost`.
///
/// [`CalculatorInputs`]: super::inputs::CalculatorInputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub competitor_monthly_cost: Money,
    pub platform_monthly_cost: Money,
    pub monthly_savings: Money,
    /// The organization is too large for self-service pricing. The cost fields are
    /// zero and must not be shown as computed values.
    pub requires_specialist_review: bool,
}

impl CalculationResult {
    pub fn priced(competitor_monthly_cost: Money, platform_monthly_cost: Money) -> Self {
        Self {
            competitor_monthly_cost,
            platform_monthly_cost,
            monthly_savings: competitor_monthly_cost - platform_monthly_cost,
            requires_specialist_review: false,
        }
    }

    pub fn specialist_review() -> Self {
        Self {
            competitor_monthly_cost: Money::ZERO,
            platform_monthly_cost: Money::ZERO,
            monthly_savings: Money::ZERO,
            requires_specialist_review: true,
        }
    }

    /// True when switching to the platform saves money.
    pub fn is_saving(&self) -> bool {
        !self.requires_specialist_review && self.monthly_savings.is_positive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_priced_derives_savings() {
        let result = CalculationResult::priced(Money::new(dec!(3430)), Money::new(dec!(980)));
        assert_eq!(result.monthly_savings, Money::new(dec!(2450)));
        assert!(result.is_saving());
        assert!(!result.requires_specialist_review);
    }

    #[test]
    fn test_negative_savings_is_not_saving() {
        let result = CalculationResult::priced(Money::new(dec!(100)), Money::new(dec!(150)));
        assert_eq!(result.monthly_savings, Money::new(dec!(-50)));
        assert!(!result.is_saving());
    }

    #[test]
    fn test_specialist_review_zeroes_costs() {
        let result = CalculationResult::specialist_review();
        assert!(result.requires_specialist_review);
        assert_eq!(result.competitor_monthly_cost, Money::ZERO);
        assert_eq!(result.platform_monthly_cost, Money::ZERO);
        assert_eq!(result.monthly_savings, Money::ZERO);
        assert!(!result.is_saving());
    }
}
