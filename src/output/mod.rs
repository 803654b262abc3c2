//! Terminal output formatting
//!
//! Colored per-letter feedback rendering and the stats report.

pub mod display;
pub mod formatters;

pub use display::{print_feedback, print_summary};
