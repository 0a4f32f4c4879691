use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects which of the two fee schedules prices a scenario.
///
/// The schedules disagree on tiers, travelers and capping, so they are never
/// blended; callers choose one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PricingPolicy {
    /// Rate tiered by headcount, travelers derived from headcount, specialist
    /// ceiling and competitor cap applied.
    #[default]
    HeadcountTiered,
    /// Rate tiered by transaction volume, travelers supplied by the caller.
    VolumeTiered,
}

impl PricingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingPolicy::HeadcountTiered => "headcount-tiered",
            PricingPolicy::VolumeTiered => "volume-tiered",
        }
    }
}

impl fmt::Display for PricingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
