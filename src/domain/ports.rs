use super::inputs::CalculatorInputs;
use super::policy::PricingPolicy;
use super::result::CalculationResult;

/// One pricing schedule: how the platform fee and the competitor estimate are derived.
///
/// Implementations must be pure; the same inputs always produce the same result.
pub trait PricingRules: Send + Sync {
    fn policy(&self) -> PricingPolicy;
    fn estimate(&self, inputs: &CalculatorInputs) -> CalculationResult;
}

pub type PricingRulesBox = Box<dyn PricingRules>;
