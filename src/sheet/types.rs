use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;
use crate::scoreboard::Scoreboard;
use crate::scoring::CompetitionType;

/// Raw results for a group of competitors.
///
/// Example YAML:
/// ```yaml
/// competition: decathlon
/// competitors:
///   - name: Ashton Eaton
///     results:
///       "100m": 10.23
///       "Long Jump": 788
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ResultSheet {
    /// Falls back to the configured competition when omitted
    #[serde(default)]
    pub competition: Option<CompetitionType>,

    #[serde(default)]
    pub competitors: Vec<CompetitorResults>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CompetitorResults {
    pub name: String,

    /// Discipline name -> raw result (seconds, centimetres or metres)
    #[serde(default)]
    pub results: BTreeMap<String, f64>,
}

impl ResultSheet {
    /// Score every result into a fresh scoreboard.
    ///
    /// Competitors without results still get a row.
    pub fn to_scoreboard(&self, fallback: CompetitionType) -> Result<Scoreboard> {
        let competition = self.competition.unwrap_or(fallback);
        let mut board = Scoreboard::new(competition);
        for competitor in &self.competitors {
            board.add_competitor(&competitor.name)?;
            for (discipline, &raw) in &competitor.results {
                board.record(&competitor.name, discipline, raw)?;
            }
        }
        Ok(board)
    }
}
