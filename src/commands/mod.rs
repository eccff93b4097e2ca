//! Command implementations

pub mod assist;
pub mod bench;
pub mod play;

pub use assist::run_assist;
pub use bench::{BenchResult, run_bench};
pub use play::{PlayConfig, PlayResult, PlayTurn, play_game};
