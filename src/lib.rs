//! Combined-events scoring.
//!
//! Converts decathlon and heptathlon performances into points with the
//! official (a, b, c) tables:
//!
//! ```
//! use decascore::scoring::{compute_score, CompetitionType};
//!
//! let points = compute_score(CompetitionType::Decathlon, "100M", 10.395).unwrap();
//! assert_eq!(points, 1000);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod scoreboard;
pub mod scoring;
pub mod sheet;

pub use error::{Result, ScoringError};
pub use scoreboard::{ScoreEntry, Scoreboard};
pub use scoring::{compute_score, resolve, CompetitionType, Discipline};
