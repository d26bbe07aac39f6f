use std::collections::HashMap;

use super::types::ResultSheet;
use crate::scoring::CompetitionType;

/// Validate a results sheet before scoring.
/// Returns all validation errors at once (not just the first).
pub fn validate_sheet(sheet: &ResultSheet, fallback: CompetitionType) -> Result<(), Vec<String>> {
    let competition = sheet.competition.unwrap_or(fallback);
    let mut errors = Vec::new();
    // Lowercased name -> first index, since the scoreboard merges them
    let mut seen_names: HashMap<String, usize> = HashMap::new();

    for (i, competitor) in sheet.competitors.iter().enumerate() {
        let name = competitor.name.trim();
        if name.is_empty() {
            errors.push(format!("competitors[{}].name: must not be empty", i));
        } else if let Some(&first) = seen_names.get(&name.to_ascii_lowercase()) {
            errors.push(format!(
                "competitors[{}].name: duplicates competitors[{}] ({})",
                i, first, sheet.competitors[first].name
            ));
        } else {
            seen_names.insert(name.to_ascii_lowercase(), i);
        }

        // Discipline slot -> first key that resolved to it
        let mut seen_slots: HashMap<usize, &str> = HashMap::new();
        for (discipline, raw) in &competitor.results {
            match competition.position(discipline) {
                None => errors.push(format!(
                    "competitors[{}].results.{}: not a {} discipline",
                    i, discipline, competition
                )),
                Some(slot) => {
                    if let Some(first) = seen_slots.get(&slot) {
                        errors.push(format!(
                            "competitors[{}].results.{}: duplicates {}",
                            i, discipline, first
                        ));
                    } else {
                        seen_slots.insert(slot, discipline);
                    }
                }
            }
            if !raw.is_finite() {
                errors.push(format!(
                    "competitors[{}].results.{}: result must be a finite number",
                    i, discipline
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        for error in &errors {
            tracing::warn!("{}", error);
        }
        Err(errors)
    }
}
