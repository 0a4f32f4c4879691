use crate::domain::money::Money;
use crate::domain::policy::PricingPolicy;
use crate::domain::result::CalculationResult;
use crate::error::Result;
use crate::locale;
use serde::Serialize;
use std::io::Write;

/// How amounts are rendered in output rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountStyle {
    /// `3430.00`
    #[default]
    Plain,
    /// `R$ 3.430,00`
    Currency,
}

impl AmountStyle {
    pub fn render(&self, amount: Money) -> String {
        match self {
            AmountStyle::Plain => format!("{:.2}", amount.round_cents()),
            AmountStyle::Currency => locale::format_currency(amount),
        }
    }
}

/// One priced scenario ready for output.
///
/// Amounts are left empty when the scenario needs a specialist, so no computed
/// value is ever shown for it.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ResultRow {
    pub scenario: String,
    pub policy: PricingPolicy,
    pub competitor_monthly_cost: Option<String>,
    pub platform_monthly_cost: Option<String>,
    pub monthly_savings: Option<String>,
    pub requires_specialist_review: bool,
}

impl ResultRow {
    pub fn new(
        scenario: impl Into<String>,
        policy: PricingPolicy,
        result: &CalculationResult,
        style: AmountStyle,
    ) -> Self {
        let shown = |amount: Money| (!result.requires_specialist_review).then(|| style.render(amount));
        Self {
            scenario: scenario.into(),
            policy,
            competitor_monthly_cost: shown(result.competitor_monthly_cost),
            platform_monthly_cost: shown(result.platform_monthly_cost),
            monthly_savings: shown(result.monthly_savings),
            requires_specialist_review: result.requires_specialist_review,
        }
    }
}

/// Writes result rows as CSV with a header taken from [`ResultRow`]'s fields.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_row(&mut self, row: &ResultRow) -> Result<()> {
        self.writer.serialize(row)?;
        Ok(())
    }

    pub fn write_rows<'a>(&mut self, rows: impl IntoIterator<Item = &'a ResultRow>) -> Result<()> {
        for row in rows {
            self.write_row(row)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes result rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut sink: W, rows: &[ResultRow]) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, rows)?;
    writeln!(sink)?;
    Ok(())
}
