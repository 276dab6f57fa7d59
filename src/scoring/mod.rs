pub mod engine;
pub mod vector;

pub use engine::{compute_scores, ScoreSheet, UnmatchedAnswer};
pub use vector::ScoreVector;
