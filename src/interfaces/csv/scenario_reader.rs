use crate::domain::inputs::CalculatorInputs;
use crate::domain::money::Money;
use crate::error::{EstimatorError, Result};
use crate::locale;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use std::io::Read;

/// A scenario row exactly as typed: every value is raw text.
///
/// Numbers may use Brazilian separators (`"1.000.000,50"`); columns may be missing.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct ScenarioRecord {
    #[serde(default)]
    pub scenario: String,
    #[serde(default)]
    pub gmv: String,
    #[serde(default)]
    pub headcount: String,
    #[serde(default)]
    pub travelers: String,
    #[serde(default)]
    pub monthly_fee: String,
    #[serde(default)]
    pub per_need_fee: String,
    #[serde(default)]
    pub use_defaults: String,
}

/// A named set of calculator inputs, already sanitized.
#[derive(Debug, PartialEq, Clone)]
pub struct Scenario {
    pub name: String,
    pub inputs: CalculatorInputs,
}

impl TryFrom<ScenarioRecord> for Scenario {
    type Error = EstimatorError;

    fn try_from(record: ScenarioRecord) -> Result<Self> {
        let use_default_estimates = parse_flag(&record.use_defaults)?;

        let inputs = CalculatorInputs {
            transaction_volume: Money::new(locale::parse(&record.gmv)),
            headcount: parse_count(&record.headcount),
            traveler_count: parse_count(&record.travelers),
            competitor_monthly_fee: Money::new(locale::parse(&record.monthly_fee)),
            competitor_per_need_fee: Money::new(locale::parse(&record.per_need_fee)),
            use_default_estimates,
        }
        .sanitized();

        Ok(Self {
            name: record.scenario.trim().to_string(),
            inputs,
        })
    }
}

/// Reads a whole number of people. Fractions are dropped, negatives and garbage
/// become zero and huge values saturate.
pub fn parse_count(text: &str) -> u32 {
    let value = locale::parse(text).trunc();
    if value.is_sign_negative() {
        0
    } else {
        value.to_u32().unwrap_or(u32::MAX)
    }
}

/// Reads a yes/no column. Blank means no.
pub fn parse_flag(text: &str) -> Result<bool> {
    match text.trim().to_lowercase().as_str() {
        "" | "false" | "no" | "0" | "nao" | "não" => Ok(false),
        "true" | "yes" | "1" | "sim" => Ok(true),
        other => Err(EstimatorError::ScenarioError(format!(
            "invalid use_defaults value '{other}'"
        ))),
    }
}

/// Reads calculator scenarios from a CSV source.
///
/// Expected header: `scenario,gmv,headcount,travelers,monthly_fee,per_need_fee,use_defaults`.
/// Whitespace is trimmed and short rows are accepted; missing values read as blank.
pub struct ScenarioReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ScenarioReader<R> {
    /// Creates a new `ScenarioReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads, parses and sanitizes scenarios.
    pub fn scenarios(self) -> impl Iterator<Item = Result<Scenario>> {
        self.reader.into_deserialize::<ScenarioRecord>().map(|result| {
            result
                .map_err(EstimatorError::from)
                .and_then(Scenario::try_from)
        })
    }
}
