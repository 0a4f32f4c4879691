//! Application layer orchestrating cost comparisons.
//!
//! This module defines the `FeeEstimator`, the entry point that prices
//! `CalculatorInputs` with the selected pricing policy.

pub mod estimator;
