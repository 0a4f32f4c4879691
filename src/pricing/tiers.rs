use crate::domain::money::Rate;
use rust_decimal::Decimal;

/// One step of a tiered fee schedule. `up_to` is inclusive; `None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeTier {
    pub up_to: Option<Decimal>,
    pub rate: Rate,
}

/// Returns the rate of the first tier whose ceiling covers `value`.
///
/// Tiers must be sorted by ceiling and the last one must be open-ended. Values past
/// a closed final tier fall back to that tier's rate.
pub fn rate_for(tiers: &[FeeTier], value: Decimal) -> Rate {
    tiers
        .iter()
        .find(|tier| tier.up_to.is_none_or(|ceiling| value <= ceiling))
        .or(tiers.last())
        .map(|tier| tier.rate)
        .unwrap_or(Rate::from_fraction(Decimal::ZERO))
}
