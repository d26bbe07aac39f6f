pub mod board;

pub use board::{ScoreEntry, Scoreboard};
