use serde::Serialize;

use crate::error::{Result, ScoringError};
use crate::scoring::{resolve_index, CompetitionType};

/// One competitor's row: a score slot per discipline in official order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    pub competitor: String,
    scores: Vec<Option<u32>>,
}

impl ScoreEntry {
    fn new(competitor: String, slots: usize) -> Self {
        Self {
            competitor,
            scores: vec![None; slots],
        }
    }

    /// Score for the discipline at `index` in official order, if recorded.
    pub fn score_for(&self, index: usize) -> Option<u32> {
        self.scores.get(index).copied().flatten()
    }

    pub fn scores(&self) -> &[Option<u32>] {
        &self.scores
    }

    /// Number of disciplines with a recorded score.
    pub fn completed(&self) -> usize {
        self.scores.iter().filter(|s| s.is_some()).count()
    }

    /// Sum of recorded scores. Missing disciplines count as zero.
    pub fn total(&self) -> u64 {
        self.scores.iter().flatten().map(|&s| u64::from(s)).sum()
    }
}

/// Competitors × disciplines matrix with running totals.
#[derive(Debug, Clone, Serialize)]
pub struct Scoreboard {
    competition: CompetitionType,
    entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    pub fn new(competition: CompetitionType) -> Self {
        Self {
            competition,
            entries: Vec::new(),
        }
    }

    pub fn competition(&self) -> CompetitionType {
        self.competition
    }

    /// Entries in order of first appearance.
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find a competitor by name, ignoring case and surrounding whitespace.
    pub fn find(&self, competitor: &str) -> Option<&ScoreEntry> {
        self.index_of(competitor).map(|i| &self.entries[i])
    }

    fn index_of(&self, competitor: &str) -> Option<usize> {
        let competitor = competitor.trim();
        self.entries
            .iter()
            .position(|e| e.competitor.eq_ignore_ascii_case(competitor))
    }

    /// Add an empty row for `competitor` unless one already exists.
    /// Returns the row index. Blank names are rejected.
    pub fn add_competitor(&mut self, competitor: &str) -> Result<usize> {
        let competitor = competitor.trim();
        if competitor.is_empty() {
            return Err(ScoringError::BlankCompetitor);
        }
        if let Some(i) = self.index_of(competitor) {
            return Ok(i);
        }
        let slots = self.competition.disciplines().len();
        self.entries
            .push(ScoreEntry::new(competitor.to_string(), slots));
        Ok(self.entries.len() - 1)
    }

    /// Score `raw` for `discipline` and store it on the competitor's row.
    ///
    /// The row is created on first use. A later result for the same
    /// discipline replaces the earlier one. Unknown disciplines and blank
    /// competitor names leave the board untouched.
    pub fn record(&mut self, competitor: &str, discipline: &str, raw: f64) -> Result<u32> {
        let (slot, resolved) = resolve_index(self.competition, discipline)?;
        let score = resolved.evaluate(raw);

        let index = self.add_competitor(competitor)?;
        let entry = &mut self.entries[index];
        entry.scores[slot] = Some(score);
        tracing::debug!(
            competitor = %entry.competitor,
            discipline = resolved.name,
            raw,
            score,
            total = entry.total(),
            "recorded score"
        );
        Ok(score)
    }

    /// Change competition, keeping competitors but dropping all scores.
    pub fn switch_competition(&mut self, competition: CompetitionType) {
        if competition == self.competition {
            return;
        }
        let slots = competition.disciplines().len();
        for entry in &mut self.entries {
            entry.scores = vec![None; slots];
        }
        self.competition = competition;
    }

    /// Entries by total, highest first. Ties keep insertion order.
    pub fn ranked(&self) -> Vec<&ScoreEntry> {
        let mut ranked: Vec<_> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.total().cmp(&a.total()));
        ranked
    }
}
