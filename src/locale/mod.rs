//! Brazilian-locale number handling.
//!
//! Every value typed by a user goes through [`parse`] before reaching an estimator,
//! and every computed value leaves through [`format`] or [`format_currency`].

pub mod brazilian;
pub mod currency;

pub use brazilian::{format, parse};
pub use currency::format_currency;
