use super::tiers::{FeeTier, rate_for};
use crate::domain::competitor::competitor_monthly_cost;
use crate::domain::inputs::CalculatorInputs;
use crate::domain::money::Rate;
use crate::domain::policy::PricingPolicy;
use crate::domain::ports::PricingRules;
use crate::domain::result::CalculationResult;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Largest organization priced without a specialist.
pub const SPECIALIST_HEADCOUNT_CEILING: u32 = 1500;
/// Share of employees assumed to travel.
pub const TRAVELER_SHARE: Decimal = dec!(0.4);
/// Competitor estimates are capped at this multiple of the platform cost.
pub const COMPETITOR_CAP_MULTIPLIER: Decimal = dec!(3.5);

pub const HEADCOUNT_TIERS: [FeeTier; 3] = [
    FeeTier {
        up_to: Some(dec!(50)),
        rate: Rate::from_fraction(dec!(0.0098)),
    },
    FeeTier {
        up_to: Some(dec!(700)),
        rate: Rate::from_fraction(dec!(0.0107)),
    },
    FeeTier {
        up_to: Some(dec!(1500)),
        rate: Rate::from_fraction(dec!(0.0117)),
    },
];

/// Platform fee tiered by headcount, with travelers derived from headcount.
///
/// Organizations above [`SPECIALIST_HEADCOUNT_CEILING`] are routed to a specialist
/// and not priced. The competitor estimate is capped at
/// [`COMPETITOR_CAP_MULTIPLIER`] times the platform cost so outliers do not inflate
/// the savings.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadcountTieredRules;

impl HeadcountTieredRules {
    pub fn new() -> Self {
        Self
    }

    pub fn travelers(headcount: u32) -> u32 {
        let derived = (Decimal::from(headcount) * TRAVELER_SHARE)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        derived.to_u32().unwrap_or(u32::MAX)
    }

    pub fn platform_rate(headcount: u32) -> Rate {
        rate_for(&HEADCOUNT_TIERS, Decimal::from(headcount))
    }
}

impl PricingRules for HeadcountTieredRules {
    fn policy(&self) -> PricingPolicy {
        PricingPolicy::HeadcountTiered
    }

    fn estimate(&self, inputs: &CalculatorInputs) -> CalculationResult {
        if inputs.headcount > SPECIALIST_HEADCOUNT_CEILING {
            return CalculationResult::specialist_review();
        }

        let travelers = Self::travelers(inputs.headcount);
        let platform = Self::platform_rate(inputs.headcount).of(inputs.transaction_volume);
        let cap = platform * COMPETITOR_CAP_MULTIPLIER;
        let competitor = competitor_monthly_cost(inputs, travelers).min(cap);

        CalculationResult::priced(competitor, platform)
    }
}
