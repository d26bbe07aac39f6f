use crate::error::{Result, ScoringError};

use super::disciplines::{CompetitionType, Discipline};

/// Look up a discipline by name within a competition.
///
/// Surrounding whitespace is ignored and the match is case-insensitive, so
/// free-form labels like `"100M"` or `" long jump"` resolve.
pub fn resolve(competition: CompetitionType, name: &str) -> Result<&'static Discipline> {
    resolve_index(competition, name).map(|(_, discipline)| discipline)
}

/// Like [`resolve`], also returning the discipline's position in official order.
pub fn resolve_index(
    competition: CompetitionType,
    name: &str,
) -> Result<(usize, &'static Discipline)> {
    match competition.position(name) {
        Some(index) => {
            let discipline = &competition.disciplines()[index];
            tracing::debug!(%competition, requested = name, resolved = discipline.name, "resolved discipline");
            Ok((index, discipline))
        }
        None => {
            tracing::debug!(%competition, requested = name, "no matching discipline");
            Err(ScoringError::UnknownDiscipline {
                competition,
                name: name.to_string(),
            })
        }
    }
}

/// Score a raw result for a named discipline.
///
/// Times are in seconds, jumps in centimetres, throws in metres.
pub fn compute_score(competition: CompetitionType, name: &str, raw: f64) -> Result<u32> {
    let discipline = resolve(competition, name)?;
    Ok(discipline.evaluate(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::FormulaShape;

    #[test]
    fn test_resolve_every_listed_discipline() {
        for competition in CompetitionType::ALL {
            for discipline in competition.disciplines() {
                let resolved = resolve(competition, discipline.name).unwrap();
                assert_eq!(resolved, discipline);
            }
        }
    }

    #[test]
    fn test_resolve_is_stable() {
        let first = resolve(CompetitionType::Decathlon, "Pole Vault").unwrap();
        let second = resolve(CompetitionType::Decathlon, "Pole Vault").unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_resolve_index_matches_official_order() {
        for competition in CompetitionType::ALL {
            for (i, discipline) in competition.disciplines().iter().enumerate() {
                let upper = discipline.name.to_uppercase();
                let (index, resolved) = resolve_index(competition, &upper).unwrap();
                assert_eq!(index, i);
                assert!(std::ptr::eq(resolved, discipline));
            }
        }
        assert!(resolve_index(CompetitionType::Heptathlon, "Pole Vault").is_err());
    }

    #[test]
    fn test_resolve_case_variation() {
        let d = resolve(CompetitionType::Decathlon, "100M").unwrap();
        assert_eq!(d.name, "100m");
        assert_eq!(d.shape, FormulaShape::Track);

        let d = resolve(CompetitionType::Heptathlon, "  JAVELIN throw ").unwrap();
        assert_eq!(d.name, "Javelin Throw");
    }

    #[test]
    fn test_resolve_unknown_discipline() {
        let err = resolve(CompetitionType::Decathlon, "Basketball Throw").unwrap_err();
        assert_eq!(
            err,
            ScoringError::UnknownDiscipline {
                competition: CompetitionType::Decathlon,
                name: "Basketball Throw".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_wrong_competition() {
        // 200m only exists in the heptathlon, Pole Vault only in the decathlon
        assert!(resolve(CompetitionType::Decathlon, "200m").is_err());
        assert!(resolve(CompetitionType::Heptathlon, "Pole Vault").is_err());
    }

    #[test]
    fn test_resolve_empty_name() {
        assert!(resolve(CompetitionType::Decathlon, "").is_err());
    }

    #[test]
    fn test_shared_names_resolve_to_different_tables() {
        let dec = resolve(CompetitionType::Decathlon, "Shot Put").unwrap();
        let hep = resolve(CompetitionType::Heptathlon, "Shot Put").unwrap();
        assert_ne!(dec.constants, hep.constants);
    }

    #[test]
    fn test_compute_score_decathlon() {
        assert_eq!(compute_score(CompetitionType::Decathlon, "100m", 11.0).unwrap(), 861);
        assert_eq!(compute_score(CompetitionType::Decathlon, "Long Jump", 750.0).unwrap(), 935);
        assert_eq!(compute_score(CompetitionType::Decathlon, "Shot Put", 16.0).unwrap(), 851);
        assert_eq!(compute_score(CompetitionType::Decathlon, "High Jump", 220.0).unwrap(), 992);
        assert_eq!(compute_score(CompetitionType::Decathlon, "Discus Throw", 50.0).unwrap(), 870);
        assert_eq!(compute_score(CompetitionType::Decathlon, "Pole Vault", 500.0).unwrap(), 910);
        assert_eq!(compute_score(CompetitionType::Decathlon, "Javelin Throw", 70.0).unwrap(), 889);
        assert_eq!(compute_score(CompetitionType::Decathlon, "1500m", 240.0).unwrap(), 953);
    }

    #[test]
    fn test_compute_score_heptathlon() {
        assert_eq!(compute_score(CompetitionType::Heptathlon, "800m", 120.0).unwrap(), 1116);
        assert_eq!(compute_score(CompetitionType::Heptathlon, "100m Hurdles", 13.0).unwrap(), 1124);
        assert_eq!(compute_score(CompetitionType::Heptathlon, "High Jump", 180.0).unwrap(), 978);
        assert_eq!(compute_score(CompetitionType::Heptathlon, "Long Jump", 650.0).unwrap(), 1007);
        assert_eq!(compute_score(CompetitionType::Heptathlon, "Shot Put", 15.0).unwrap(), 861);
        assert_eq!(compute_score(CompetitionType::Heptathlon, "Javelin Throw", 50.0).unwrap(), 860);
    }

    #[test]
    fn test_compute_score_negative_base() {
        assert_eq!(compute_score(CompetitionType::Decathlon, "100m", 25.0).unwrap(), 0);
        assert_eq!(compute_score(CompetitionType::Decathlon, "Shot Put", 1.0).unwrap(), 0);
        assert_eq!(compute_score(CompetitionType::Decathlon, "Long Jump", -3.0).unwrap(), 0);
    }

    #[test]
    fn test_compute_score_unknown() {
        let result = compute_score(CompetitionType::Heptathlon, "Basketball Throw", 10.0);
        assert!(matches!(result, Err(ScoringError::UnknownDiscipline { .. })));
    }

    #[test]
    fn test_compute_score_is_idempotent() {
        let first = compute_score(CompetitionType::Decathlon, "400m", 48.5).unwrap();
        for _ in 0..10 {
            assert_eq!(compute_score(CompetitionType::Decathlon, "400m", 48.5).unwrap(), first);
        }
    }

    #[test]
    fn test_compute_score_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    compute_score(CompetitionType::Decathlon, "100m", 10.0 + i as f64 * 0.1).unwrap()
                })
            })
            .collect();
        let scores: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(scores[0], 1096);
    }
}
