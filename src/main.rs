use clap::{Parser, Subcommand};
use std::path::PathBuf;

use decascore::config::{ColorChoice, OutputFormat};
use decascore::scoring::CompetitionType;
use decascore::ScoringError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_OUTPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;
const EXIT_UNKNOWN_DISCIPLINE: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one result
    Score {
        /// Discipline name, case-insensitive (e.g. "100m", "long jump")
        discipline: String,
        /// Raw result: seconds for running events, centimetres for jumps, metres for throws
        #[arg(allow_negative_numbers = true)]
        result: f64,
    },
    /// List the disciplines and scoring constants of a competition
    Disciplines,
    /// Score every result in a YAML results sheet
    Sheet {
        /// Path to the results sheet
        path: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "decascore")]
#[command(about = "Decathlon and heptathlon points calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/decascore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Competition type (overrides config)
    #[arg(short = 't', long, global = true, value_enum, ignore_case = true)]
    competition: Option<CompetitionType>,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// When to use colors (overrides config)
    #[arg(long, global = true, value_enum)]
    color: Option<ColorChoice>,

    #[command(subcommand)]
    command: Commands,
}

fn exit_scoring_error(err: ScoringError) -> ! {
    eprintln!("{}", err);
    match err {
        ScoringError::UnknownDiscipline { .. } => {
            eprintln!("Run `decascore disciplines` to see the available names.");
            std::process::exit(EXIT_UNKNOWN_DISCIPLINE);
        }
        ScoringError::BlankCompetitor => std::process::exit(EXIT_CONFIG),
    }
}

fn print_or_exit(output: serde_json::Result<String>) {
    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(EXIT_OUTPUT);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    decascore::logging::init_cli_logger(cli.verbose);

    // Load config
    let config = match decascore::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let competition = cli.competition.unwrap_or(config.competition);
    let format = cli.format.unwrap_or(config.format);
    let use_colors = cli
        .color
        .unwrap_or(config.color)
        .enabled(decascore::output::should_use_colors());

    tracing::debug!(%competition, ?format, use_colors, "effective settings");

    match cli.command {
        Commands::Score { discipline, result } => {
            if !result.is_finite() {
                eprintln!("Result must be a finite number, got {}", result);
                std::process::exit(EXIT_CONFIG);
            }

            let resolved = match decascore::resolve(competition, &discipline) {
                Ok(d) => d,
                Err(e) => exit_scoring_error(e),
            };
            let score = resolved.evaluate(result);

            match format {
                OutputFormat::Table => println!(
                    "{}",
                    decascore::output::format_score_line(resolved, result, score, use_colors)
                ),
                OutputFormat::Tsv => {
                    println!("{}", decascore::output::format_score_tsv(resolved, result, score))
                }
                OutputFormat::Json => {
                    print_or_exit(decascore::output::format_score_json(resolved, result, score))
                }
            }
        }
        Commands::Disciplines => match format {
            OutputFormat::Table => println!(
                "{}",
                decascore::output::format_disciplines(competition, use_colors)
            ),
            OutputFormat::Tsv => {
                println!("{}", decascore::output::format_disciplines_tsv(competition))
            }
            OutputFormat::Json => {
                print_or_exit(serde_json::to_string_pretty(competition.disciplines()))
            }
        },
        Commands::Sheet { path } => {
            let mut sheet = match decascore::sheet::load_sheet(&path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Sheet error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            // A competition named in the sheet wins over config, but not over the flag
            let competition = cli.competition.or(sheet.competition).unwrap_or(competition);
            sheet.competition = Some(competition);

            if let Err(errors) = decascore::sheet::validate_sheet(&sheet, competition) {
                eprintln!("Results sheet errors:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_CONFIG);
            }

            let board = match sheet.to_scoreboard(competition) {
                Ok(b) => b,
                Err(e) => exit_scoring_error(e),
            };

            tracing::info!(
                competitors = board.entries().len(),
                competition = %board.competition(),
                "scored results sheet"
            );

            match format {
                OutputFormat::Table => println!(
                    "{}",
                    decascore::output::format_scoreboard_table(&board, use_colors)
                ),
                OutputFormat::Tsv => {
                    println!("{}", decascore::output::format_scoreboard_tsv(&board))
                }
                OutputFormat::Json => {
                    print_or_exit(decascore::output::format_scoreboard_json(&board))
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
