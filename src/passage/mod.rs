pub mod engine;
pub mod matrix;

pub use engine::{FirstPassage, PassageEngine};
pub use matrix::{
    Analyzer, BuildOptions, PassageKey, PassageRow, WaitingTimeMatrix, compute_waiting_times,
};
