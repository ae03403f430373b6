//! Terminal output formatting
//!
//! Display utilities for the text frontend and the session summary.

pub mod display;
pub mod formatters;

pub use display::print_session_summary;
