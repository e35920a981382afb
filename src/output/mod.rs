//! Terminal output formatting
//!
//! Display utilities for the console game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_defeat, print_farewell, print_round_status, print_victory, print_welcome};
