use crate::domain::policy::PricingPolicy;
use crate::domain::result::CalculationResult;
use crate::locale::{self, format_currency};
use crate::pricing::headcount_tiered::SPECIALIST_HEADCOUNT_CEILING;
use rust_decimal::Decimal;

/// Renders a human-readable comparison for the terminal.
pub fn render_summary(scenario: &str, policy: PricingPolicy, result: &CalculationResult) -> String {
    let header = format!("Scenario: {scenario} ({policy})\n");

    if result.requires_specialist_review {
        let ceiling = locale::format(Decimal::from(SPECIALIST_HEADCOUNT_CEILING), false);
        return header
            + &format!(
                "Organizations with more than {ceiling} employees get a tailored proposal. \
                 Contact a specialist for pricing.\n"
            );
    }

    let verdict = if result.is_saving() { "saving" } else { "no saving" };
    [
        header,
        format!(
            "  Competitor monthly cost: {}\n",
            format_currency(result.competitor_monthly_cost)
        ),
        format!(
            "  Platform monthly cost:   {}\n",
            format_currency(result.platform_monthly_cost)
        ),
        format!(
            "  Monthly savings:         {} ({verdict})\n",
            format_currency(result.monthly_savings)
        ),
    ]
    .concat()
}
