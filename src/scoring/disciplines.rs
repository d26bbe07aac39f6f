use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::formula::{self, FormulaConstants, FormulaShape};

/// Combined-events competition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CompetitionType {
    #[default]
    #[value(alias = "dec")]
    Decathlon,
    #[value(alias = "hep")]
    Heptathlon,
}

impl CompetitionType {
    pub const ALL: [CompetitionType; 2] = [CompetitionType::Decathlon, CompetitionType::Heptathlon];

    /// Disciplines of this competition in official order.
    pub fn disciplines(self) -> &'static [Discipline] {
        match self {
            CompetitionType::Decathlon => &DECATHLON,
            CompetitionType::Heptathlon => &HEPTATHLON,
        }
    }

    /// Position of a discipline in official order, matched case-insensitively.
    pub fn position(self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.disciplines()
            .iter()
            .position(|d| d.name.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for CompetitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompetitionType::Decathlon => f.pad("decathlon"),
            CompetitionType::Heptathlon => f.pad("heptathlon"),
        }
    }
}

impl FromStr for CompetitionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decathlon" | "dec" => Ok(CompetitionType::Decathlon),
            "heptathlon" | "hep" => Ok(CompetitionType::Heptathlon),
            other => anyhow::bail!("Unknown competition type: {}", other),
        }
    }
}

impl TryFrom<String> for CompetitionType {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Unit the official table expects the raw result in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultUnit {
    Seconds,
    Centimetres,
    Metres,
}

impl ResultUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            ResultUnit::Seconds => "s",
            ResultUnit::Centimetres => "cm",
            ResultUnit::Metres => "m",
        }
    }
}

/// One row of the scoring tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discipline {
    pub competition: CompetitionType,
    pub name: &'static str,
    pub shape: FormulaShape,
    pub constants: FormulaConstants,
    pub unit: ResultUnit,
}

impl Discipline {
    const fn track(competition: CompetitionType, name: &'static str, a: f64, b: f64, c: f64) -> Self {
        Self {
            competition,
            name,
            shape: FormulaShape::Track,
            constants: FormulaConstants::new(a, b, c),
            unit: ResultUnit::Seconds,
        }
    }

    const fn field(
        competition: CompetitionType,
        name: &'static str,
        unit: ResultUnit,
        a: f64,
        b: f64,
        c: f64,
    ) -> Self {
        Self {
            competition,
            name,
            shape: FormulaShape::Field,
            constants: FormulaConstants::new(a, b, c),
            unit,
        }
    }

    /// Points for a raw result, see [`formula::evaluate`].
    pub fn evaluate(&self, raw: f64) -> u32 {
        formula::evaluate(self.shape, &self.constants, raw)
    }
}

use CompetitionType::{Decathlon, Heptathlon};
use ResultUnit::{Centimetres, Metres};

static DECATHLON: [Discipline; 10] = [
    Discipline::track(Decathlon, "100m", 25.4347, 18.0, 1.81),
    Discipline::track(Decathlon, "400m", 1.53775, 82.0, 1.81),
    Discipline::track(Decathlon, "1500m", 0.03768, 480.0, 1.85),
    Discipline::track(Decathlon, "110m Hurdles", 5.74352, 28.5, 1.92),
    Discipline::field(Decathlon, "Long Jump", Centimetres, 0.14354, 220.0, 1.4),
    Discipline::field(Decathlon, "High Jump", Centimetres, 0.8465, 75.0, 1.42),
    Discipline::field(Decathlon, "Pole Vault", Centimetres, 0.2797, 100.0, 1.35),
    Discipline::field(Decathlon, "Discus Throw", Metres, 12.91, 4.0, 1.1),
    Discipline::field(Decathlon, "Javelin Throw", Metres, 10.14, 7.0, 1.08),
    Discipline::field(Decathlon, "Shot Put", Metres, 51.39, 1.5, 1.05),
];

static HEPTATHLON: [Discipline; 7] = [
    Discipline::track(Heptathlon, "100m Hurdles", 9.23076, 26.7, 1.835),
    Discipline::field(Heptathlon, "High Jump", Centimetres, 1.84523, 75.0, 1.348),
    Discipline::field(Heptathlon, "Shot Put", Metres, 56.0211, 1.5, 1.05),
    Discipline::track(Heptathlon, "200m", 4.99087, 42.5, 1.81),
    Discipline::field(Heptathlon, "Long Jump", Centimetres, 0.188807, 210.0, 1.41),
    Discipline::field(Heptathlon, "Javelin Throw", Metres, 15.9803, 3.8, 1.04),
    Discipline::track(Heptathlon, "800m", 0.11193, 254.0, 1.88),
];
