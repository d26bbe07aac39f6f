pub mod storage;
pub mod types;
pub mod validation;

pub use storage::load_sheet;
pub use types::{CompetitorResults, ResultSheet};
pub use validation::validate_sheet;
