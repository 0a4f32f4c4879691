use crate::domain::inputs::CalculatorInputs;
use crate::domain::policy::PricingPolicy;
use crate::domain::ports::PricingRulesBox;
use crate::domain::result::CalculationResult;
use crate::pricing::rules_for;
use tracing::debug;

/// The main entry point for cost comparisons.
///
/// `FeeEstimator` owns one set of pricing rules and prices inputs with them. It holds
/// no other state, so the same estimator can be reused for every input change.
pub struct FeeEstimator {
    rules: PricingRulesBox,
}

impl FeeEstimator {
    /// Creates an estimator from any pricing rules.
    pub fn new(rules: PricingRulesBox) -> Self {
        Self { rules }
    }

    /// Creates an estimator for one of the built-in policies.
    pub fn for_policy(policy: PricingPolicy) -> Self {
        Self::new(rules_for(policy))
    }

    pub fn policy(&self) -> PricingPolicy {
        self.rules.policy()
    }

    /// Prices one set of inputs.
    ///
    /// Inputs are used as given; sanitize user-entered values first.
    pub fn compute(&self, inputs: &CalculatorInputs) -> CalculationResult {
        let result = self.rules.estimate(inputs);
        debug!(
            policy = %self.policy(),
            headcount = inputs.headcount,
            volume = %inputs.transaction_volume.value(),
            competitor = %result.competitor_monthly_cost.value(),
            platform = %result.platform_monthly_cost.value(),
            specialist = result.requires_specialist_review,
            "priced scenario"
        );
        result
    }

    /// Prices a sequence of inputs, preserving order.
    pub fn compute_all<'a, I>(&'a self, inputs: I) -> impl Iterator<Item = CalculationResult> + 'a
    where
        I: IntoIterator<Item = &'a CalculatorInputs>,
        I::IntoIter: 'a,
    {
        inputs.into_iter().map(move |inputs| self.compute(inputs))
    }
}

impl Default for FeeEstimator {
    fn default() -> Self {
        Self::for_policy(PricingPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use crate::domain::ports::PricingRules;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    struct FlatRules;

    impl PricingRules for FlatRules {
        fn policy(&self) -> PricingPolicy {
            PricingPolicy::VolumeTiered
        }

        fn estimate(&self, _inputs: &CalculatorInputs) -> CalculationResult {
            CalculationResult::priced(Money::new(dec!(10)), Money::new(dec!(4)))
        }
    }

    #[test]
    fn test_default_is_headcount_tiered() {
        assert_eq!(FeeEstimator::default().policy(), PricingPolicy::HeadcountTiered);
    }

    #[test]
    fn test_custom_rules_are_used() {
        let estimator = FeeEstimator::new(Box::new(FlatRules));
        let result = estimator.compute(&CalculatorInputs::default());
        assert_eq!(result.monthly_savings, Money::new(dec!(6)));
    }

    #[test]
    fn test_policies_price_differently() {
        let inputs = CalculatorInputs::new(dec!(100000), 50)
            .with_travelers(20)
            .with_competitor_fees(dec!(500), dec!(15));

        let headcount = FeeEstimator::for_policy(PricingPolicy::HeadcountTiered).compute(&inputs);
        let volume = FeeEstimator::for_policy(PricingPolicy::VolumeTiered).compute(&inputs);

        assert_eq!(headcount.platform_monthly_cost, Money::new(dec!(980)));
        assert_eq!(volume.platform_monthly_cost, Money::new(dec!(1100)));
        assert_eq!(headcount.competitor_monthly_cost, volume.competitor_monthly_cost);
    }

    #[test]
    fn test_compute_is_repeatable() {
        let estimator = FeeEstimator::default();
        let inputs = CalculatorInputs::new(dec!(250000), 300).with_default_estimates(true);
        assert_eq!(estimator.compute(&inputs), estimator.compute(&inputs));
    }

    #[test]
    fn test_compute_all_preserves_order() {
        let estimator = FeeEstimator::default();
        let scenarios = vec![
            CalculatorInputs::new(dec!(100000), 50),
            CalculatorInputs::new(dec!(100000), 2000),
            CalculatorInputs::new(dec!(100000), 600),
        ];

        let results: Vec<CalculationResult> = estimator.compute_all(&scenarios).collect();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].platform_monthly_cost, Money::new(dec!(980)));
        assert!(results[1].requires_specialist_review);
        assert_eq!(results[2].platform_monthly_cost, Money::new(dec!(1070)));
    }

    #[test]
    fn test_savings_identity_holds_for_both_policies() {
        let scenarios = [
            CalculatorInputs::new(dec!(0), 0),
            CalculatorInputs::new(dec!(12345.67), 7).with_competitor_fees(dec!(99.9), dec!(3.3)),
            CalculatorInputs::new(dec!(987654.32), 1200).with_default_estimates(true),
            CalculatorInputs::new(dec!(150000.01), 40).with_travelers(40),
        ];

        for policy in [PricingPolicy::HeadcountTiered, PricingPolicy::VolumeTiered] {
            let estimator = FeeEstimator::for_policy(policy);
            for result in estimator.compute_all(&scenarios) {
                assert_eq!(
                    result.monthly_savings,
                    result.competitor_monthly_cost - result.platform_monthly_cost
                );
            }
        }
    }

    #[test]
    fn test_extreme_inputs_are_priced_for_both_policies() {
        let scenarios = [
            CalculatorInputs::new(Decimal::MAX, 1500)
                .with_competitor_fees(Decimal::MAX, Decimal::MAX)
                .with_travelers(u32::MAX),
            CalculatorInputs::new(dec!(100000), u32::MAX)
                .with_competitor_fees(Decimal::MAX, Decimal::MAX)
                .with_travelers(u32::MAX),
            CalculatorInputs::new(Decimal::MAX, u32::MAX).with_default_estimates(true),
        ];

        for policy in [PricingPolicy::HeadcountTiered, PricingPolicy::VolumeTiered] {
            let estimator = FeeEstimator::for_policy(policy);
            for result in estimator.compute_all(&scenarios) {
                assert_eq!(
                    result.monthly_savings,
                    result.competitor_monthly_cost - result.platform_monthly_cost
                );
                assert!(!result.monthly_savings.value().is_sign_negative());
            }
        }
    }
}
