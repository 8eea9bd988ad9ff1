//! Command implementations

pub mod analyze;
pub mod play;
pub mod replay;
pub mod stress;

pub use analyze::{AnalysisResult, analyze_guess};
pub use play::{PlayOutcome, prompt_line, run_play};
pub use replay::{ReplayResult, replay};
pub use stress::{StressConfig, StressResult, run_stress};
