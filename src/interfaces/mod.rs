//! Presentation edges: scenario input, result output and terminal summaries.

pub mod csv;
pub mod report;
