//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_replay_result, print_stress_result};
pub use formatters::{GlyphStyle, colored_guess, render_pattern, share_text};
