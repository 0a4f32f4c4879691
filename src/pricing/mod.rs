//! Fee schedules implementing the [`PricingRules`](crate::domain::ports::PricingRules) port.

pub mod headcount_tiered;
pub mod tiers;
pub mod volume_tiered;

use crate::domain::policy::PricingPolicy;
use crate::domain::ports::PricingRulesBox;
use headcount_tiered::HeadcountTieredRules;
use volume_tiered::VolumeTieredRules;

/// Builds the rules for a named policy.
pub fn rules_for(policy: PricingPolicy) -> PricingRulesBox {
    match policy {
        PricingPolicy::HeadcountTiered => Box::new(HeadcountTieredRules::new()),
        PricingPolicy::VolumeTiered => Box::new(VolumeTieredRules::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::PricingRules;

    #[test]
    fn test_rules_match_requested_policy() {
        for policy in [PricingPolicy::HeadcountTiered, PricingPolicy::VolumeTiered] {
            assert_eq!(rules_for(policy).policy(), policy);
        }
    }
}
