use thiserror::Error;

use crate::scoring::CompetitionType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// No discipline of `competition` matches `name` (case-insensitive).
    #[error("Discipline not implemented: {name} ({competition})")]
    UnknownDiscipline {
        competition: CompetitionType,
        name: String,
    },

    /// Competitor names must contain something besides whitespace.
    #[error("Competitor name must not be empty")]
    BlankCompetitor,
}

pub type Result<T> = std::result::Result<T, ScoringError>;
