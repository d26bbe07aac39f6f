use serde::{Deserialize, Serialize};

use crate::scoring::CompetitionType;

/// User configuration, every field optional.
///
/// Example YAML:
/// ```yaml
/// competition: heptathlon
/// format: tsv
/// color: never
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Competition used when neither the command line nor a sheet names one
    #[serde(default)]
    pub competition: CompetitionType,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub color: ColorChoice,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve against whether stdout is a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.competition, CompetitionType::Decathlon);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.color, ColorChoice::Auto);
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
competition: heptathlon
format: json
color: never
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.competition, CompetitionType::Heptathlon);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn test_competition_parse_ignores_case() {
        let config: Config = serde_saphyr::from_str("competition: DECATHLON").unwrap();
        assert_eq!(config.competition, CompetitionType::Decathlon);
        let config: Config = serde_saphyr::from_str("competition: Hep").unwrap();
        assert_eq!(config.competition, CompetitionType::Heptathlon);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "queries: []";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            competition: CompetitionType::Heptathlon,
            format: OutputFormat::Tsv,
            color: ColorChoice::Always,
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_color_choice() {
        assert!(ColorChoice::Auto.enabled(true));
        assert!(!ColorChoice::Auto.enabled(false));
        assert!(ColorChoice::Always.enabled(false));
        assert!(!ColorChoice::Never.enabled(true));
    }
}
