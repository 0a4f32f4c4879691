//! Domain types for the cost comparison: money, inputs, results and the pricing port.

pub mod competitor;
pub mod inputs;
pub mod money;
pub mod policy;
pub mod ports;
pub mod result;
