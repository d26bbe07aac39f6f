use serde::Serialize;

/// Which way a points curve runs.
///
/// Track events score higher for smaller results (times), field events score
/// higher for larger results (distances and heights).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormulaShape {
    Track,
    Field,
}

impl FormulaShape {
    /// Distance between the raw result and the reference value, in the
    /// direction that makes a better performance larger. Never negative.
    fn base(self, reference: f64, raw: f64) -> f64 {
        let base = match self {
            FormulaShape::Track => reference - raw,
            FormulaShape::Field => raw - reference,
        };
        // f64::max drops NaN, so a NaN base also ends up at zero
        base.max(0.0)
    }
}

impl std::fmt::Display for FormulaShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormulaShape::Track => f.pad("track"),
            FormulaShape::Field => f.pad("field"),
        }
    }
}

/// The (a, b, c) triple of an official points table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormulaConstants {
    /// Scale factor
    pub a: f64,
    /// Reference result at which the curve reaches zero points
    pub b: f64,
    /// Exponent
    pub c: f64,
}

impl FormulaConstants {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

/// Apply a points formula to a raw result.
///
/// Track: `floor(a * (b - raw)^c)`, Field: `floor(a * (raw - b)^c)`. A negative
/// base is clamped to zero before exponentiation, so results on the wrong side
/// of the reference value score 0 instead of producing NaN. Points are
/// truncated, never rounded up. Values beyond `u32::MAX` saturate.
pub fn evaluate(shape: FormulaShape, constants: &FormulaConstants, raw: f64) -> u32 {
    let base = shape.base(constants.b, raw);
    let points = constants.a * base.powf(constants.c);
    points.floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRINT: FormulaConstants = FormulaConstants::new(25.4347, 18.0, 1.81);
    const JUMP: FormulaConstants = FormulaConstants::new(0.14354, 220.0, 1.4);

    #[test]
    fn test_track_formula() {
        // 25.4347 * 7^1.81 = 861.10
        assert_eq!(evaluate(FormulaShape::Track, &SPRINT, 11.0), 861);
    }

    #[test]
    fn test_field_formula() {
        // 0.14354 * 530^1.4 = 935.32
        assert_eq!(evaluate(FormulaShape::Field, &JUMP, 750.0), 935);
    }

    #[test]
    fn test_points_are_truncated_not_rounded() {
        // 25.4347 * 7.605^1.81 = 1000.50
        assert_eq!(evaluate(FormulaShape::Track, &SPRINT, 10.395), 1000);
    }

    #[test]
    fn test_track_slower_than_reference_scores_zero() {
        assert_eq!(evaluate(FormulaShape::Track, &SPRINT, 25.0), 0);
    }

    #[test]
    fn test_field_below_reference_scores_zero() {
        assert_eq!(evaluate(FormulaShape::Field, &JUMP, 100.0), 0);
        assert_eq!(evaluate(FormulaShape::Field, &JUMP, -50.0), 0);
    }

    #[test]
    fn test_exactly_at_reference_scores_zero() {
        assert_eq!(evaluate(FormulaShape::Track, &SPRINT, 18.0), 0);
        assert_eq!(evaluate(FormulaShape::Field, &JUMP, 220.0), 0);
    }

    #[test]
    fn test_nan_scores_zero() {
        assert_eq!(evaluate(FormulaShape::Track, &SPRINT, f64::NAN), 0);
        assert_eq!(evaluate(FormulaShape::Field, &JUMP, f64::NAN), 0);
    }

    #[test]
    fn test_huge_base_saturates() {
        assert_eq!(evaluate(FormulaShape::Field, &JUMP, f64::MAX), u32::MAX);
    }

    #[test]
    fn test_track_is_non_increasing() {
        let mut previous = u32::MAX;
        for step in 0..400 {
            let raw = 5.0 + step as f64 * 0.05;
            let score = evaluate(FormulaShape::Track, &SPRINT, raw);
            assert!(score <= previous, "score rose at {raw}");
            previous = score;
        }
    }

    #[test]
    fn test_field_is_non_decreasing() {
        let mut previous = 0;
        for step in 0..400 {
            let raw = 150.0 + step as f64 * 2.5;
            let score = evaluate(FormulaShape::Field, &JUMP, raw);
            assert!(score >= previous, "score fell at {raw}");
            previous = score;
        }
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(FormulaShape::Track.to_string(), "track");
        assert_eq!(FormulaShape::Field.to_string(), "field");
    }
}
