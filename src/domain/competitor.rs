use super::inputs::CalculatorInputs;
use super::money::{Money, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Percentage of GMV competitors charge on top of any subscription.
pub const COMPETITOR_GMV_FEE: Rate = Rate::from_fraction(dec!(0.02));
/// Average travel needs per traveler (or per employee, for the averages).
pub const NEEDS_PER_TRAVELER: Decimal = dec!(3);
/// Industry-average fee per need.
pub const AVERAGE_PER_NEED_FEE: Decimal = dec!(10);
/// Industry-average monthly seat price per employee.
pub const AVERAGE_SEAT_PRICE: Decimal = dec!(29.90);

/// Estimates what a competitor charges per month.
///
/// With `use_default_estimates` the entered fees are ignored and every employee is
/// billed the average seat price plus three needs at the average fee. Otherwise the
/// entered subscription is charged once and `travelers` drive the per-need fees.
pub fn competitor_monthly_cost(inputs: &CalculatorInputs, travelers: u32) -> Money {
    let gmv_fee = COMPETITOR_GMV_FEE.of(inputs.transaction_volume);

    if inputs.use_default_estimates {
        let headcount = Money::new(Decimal::from(inputs.headcount));
        let needs_fee = headcount * NEEDS_PER_TRAVELER * AVERAGE_PER_NEED_FEE;
        let seats = headcount * AVERAGE_SEAT_PRICE;
        gmv_fee + needs_fee + seats
    } else {
        let needs_fee =
            inputs.competitor_per_need_fee * (Decimal::from(travelers) * NEEDS_PER_TRAVELER);
        inputs.competitor_monthly_fee + gmv_fee + needs_fee
    }
}
