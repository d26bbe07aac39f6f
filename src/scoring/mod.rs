pub mod disciplines;
pub mod engine;
pub mod formula;

pub use disciplines::{CompetitionType, Discipline, ResultUnit};
pub use engine::{compute_score, resolve, resolve_index};
pub use formula::{evaluate, FormulaConstants, FormulaShape};
