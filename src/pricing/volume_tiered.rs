use super::tiers::{FeeTier, rate_for};
use crate::domain::competitor::competitor_monthly_cost;
use crate::domain::inputs::CalculatorInputs;
use crate::domain::money::Rate;
use crate::domain::policy::PricingPolicy;
use crate::domain::ports::PricingRules;
use crate::domain::result::CalculationResult;
use rust_decimal_macros::dec;

pub const VOLUME_TIERS: [FeeTier; 3] = [
    FeeTier {
        up_to: Some(dec!(50000)),
        rate: Rate::from_fraction(dec!(0.010)),
    },
    FeeTier {
        up_to: Some(dec!(150000)),
        rate: Rate::from_fraction(dec!(0.011)),
    },
    FeeTier {
        up_to: None,
        rate: Rate::from_fraction(dec!(0.012)),
    },
];

/// Platform fee tiered by monthly transaction volume.
///
/// Travelers come straight from the inputs. There is no specialist ceiling and the
/// competitor estimate is not capped.
#[derive(Debug, Clone, Copy, Default)]
pub struct VolumeTieredRules;

impl VolumeTieredRules {
    pub fn new() -> Self {
        Self
    }

    pub fn platform_rate(inputs: &CalculatorInputs) -> Rate {
        rate_for(&VOLUME_TIERS, inputs.transaction_volume.value())
    }
}

impl PricingRules for VolumeTieredRules {
    fn policy(&self) -> PricingPolicy {
        PricingPolicy::VolumeTiered
    }

    fn estimate(&self, inputs: &CalculatorInputs) -> CalculationResult {
        let platform = Self::platform_rate(inputs).of(inputs.transaction_volume);
        let competitor = competitor_monthly_cost(inputs, inputs.traveler_count);
        CalculationResult::priced(competitor, platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;

    fn estimate(inputs: CalculatorInputs) -> CalculationResult {
        VolumeTieredRules::new().estimate(&inputs)
    }

    #[test]
    fn test_volume_boundaries() {
        let at_first_ceiling = estimate(CalculatorInputs::new(dec!(50000), 10));
        assert_eq!(at_first_ceiling.platform_monthly_cost, Money::new(dec!(500)));

        let above_first = estimate(CalculatorInputs::new(dec!(50001), 10));
        assert_eq!(above_first.platform_monthly_cost, Money::new(dec!(550.011)));

        let at_second_ceiling = estimate(CalculatorInputs::new(dec!(150000), 10));
        assert_eq!(at_second_ceiling.platform_monthly_cost, Money::new(dec!(1650)));

        let above_second = estimate(CalculatorInputs::new(dec!(150001), 10));
        assert_eq!(above_second.platform_monthly_cost, Money::new(dec!(1800.012)));
    }

    #[test]
    fn test_large_headcount_is_still_priced() {
        let result = estimate(CalculatorInputs::new(dec!(1000000), 5000).with_default_estimates(true));
        assert!(!result.requires_specialist_review);
        assert_eq!(result.platform_monthly_cost, Money::new(dec!(12000)));
    }

    #[test]
    fn test_competitor_is_not_capped() {
        // 20000 GMV fee + 5000*3*10 needs + 5000*29.90 seats
        let result = estimate(CalculatorInputs::new(dec!(1000000), 5000).with_default_estimates(true));
        assert_eq!(result.competitor_monthly_cost, Money::new(dec!(319500)));
        assert_eq!(result.monthly_savings, Money::new(dec!(307500)));
    }

    #[test]
    fn test_supplied_travelers_drive_need_fees() {
        // 200 + 2000 GMV fee + 7 travelers * 3 * 12
        let result = estimate(
            CalculatorInputs::new(dec!(100000), 50)
                .with_travelers(7)
                .with_competitor_fees(dec!(200), dec!(12)),
        );
        assert_eq!(result.competitor_monthly_cost, Money::new(dec!(2452)));
        assert_eq!(result.platform_monthly_cost, Money::new(dec!(1100)));
        assert_eq!(result.monthly_savings, Money::new(dec!(1352)));
    }
}
