use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::scoreboard::{ScoreEntry, Scoreboard};
use crate::scoring::{CompetitionType, Discipline};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a single scored result as one line
/// Format: "{discipline} ({competition}): {raw} {unit} -> {score} points"
pub fn format_score_line(discipline: &Discipline, raw: f64, score: u32, use_colors: bool) -> String {
    let result = format!("{} {}", raw, discipline.unit.symbol());
    if use_colors {
        format!(
            "{} ({}): {} -> {} points",
            discipline.name.bold(),
            discipline.competition.cyan(),
            result,
            score.green().bold()
        )
    } else {
        format!(
            "{} ({}): {} -> {} points",
            discipline.name, discipline.competition, result, score
        )
    }
}

/// Format a single scored result as one TSV line: discipline, raw, score
pub fn format_score_tsv(discipline: &Discipline, raw: f64, score: u32) -> String {
    format!("{}\t{}\t{}", discipline.name, raw, score)
}

#[derive(Serialize)]
struct JsonScore<'a> {
    competition: CompetitionType,
    discipline: &'a str,
    result: f64,
    unit: &'a str,
    score: u32,
}

/// Format a single scored result as a JSON object
pub fn format_score_json(discipline: &Discipline, raw: f64, score: u32) -> serde_json::Result<String> {
    serde_json::to_string(&JsonScore {
        competition: discipline.competition,
        discipline: discipline.name,
        result: raw,
        unit: discipline.unit.symbol(),
        score,
    })
}

/// List the disciplines of a competition in official order, with their
/// formula shape, expected unit and constants.
pub fn format_disciplines(competition: CompetitionType, use_colors: bool) -> String {
    let disciplines = competition.disciplines();
    let name_width = disciplines.iter().map(|d| d.name.len()).max().unwrap_or(0);

    disciplines
        .iter()
        .enumerate()
        .map(|(idx, d)| {
            let index_str = format!("{:>2}.", idx + 1);
            let name = format!("{:<width$}", d.name, width = name_width);
            let details = format!(
                "{:<5}  {:<2}  a={} b={} c={}",
                d.shape,
                d.unit.symbol(),
                d.constants.a,
                d.constants.b,
                d.constants.c
            );
            if use_colors {
                format!("{} {}  {}", index_str.dimmed(), name.bold(), details)
            } else {
                format!("{} {}  {}", index_str, name, details)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// List the disciplines as tab-separated values for scripting.
/// Columns: name, shape, unit, a, b, c (no header)
pub fn format_disciplines_tsv(competition: CompetitionType) -> String {
    competition
        .disciplines()
        .iter()
        .map(|d| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                d.name,
                d.shape,
                d.unit.symbol(),
                d.constants.a,
                d.constants.b,
                d.constants.c
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn score_cell(entry: &ScoreEntry, index: usize) -> String {
    entry
        .score_for(index)
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Format a scoreboard as an aligned table, highest total first.
/// Columns: rank, competitor, one per discipline in official order, total.
pub fn format_scoreboard_table(board: &Scoreboard, use_colors: bool) -> String {
    if board.is_empty() {
        return "No competitors.".to_string();
    }

    let disciplines = board.competition().disciplines();
    let ranked = board.ranked();

    let name_width = ranked
        .iter()
        .map(|e| e.competitor.chars().count())
        .chain(std::iter::once("Competitor".len()))
        .max()
        .unwrap_or(0);
    // Per-event scores fit in 4 digits, totals in 5
    let widths: Vec<usize> = disciplines.iter().map(|d| d.name.len().max(4)).collect();
    let total_width = 5;

    let mut header = format!("    {:<width$}", "Competitor", width = name_width);
    for (d, &w) in disciplines.iter().zip(&widths) {
        header.push_str(&format!("  {:>w$}", d.name, w = w));
    }
    header.push_str(&format!("  {:>w$}", "Total", w = total_width));

    let mut lines = vec![if use_colors {
        header.bold().to_string()
    } else {
        header
    }];

    for (idx, entry) in ranked.iter().enumerate() {
        let index_str = format!("{:>2}.", idx + 1);
        let padding = name_width.saturating_sub(entry.competitor.chars().count());
        let name = format!("{}{}", entry.competitor, " ".repeat(padding));

        let mut cells = String::new();
        for (i, &w) in widths.iter().enumerate() {
            cells.push_str(&format!("  {:>w$}", score_cell(entry, i), w = w));
        }
        let total = format!("{:>w$}", entry.total(), w = total_width);

        if use_colors {
            lines.push(format!(
                "{} {}{}  {}",
                index_str.dimmed(),
                name,
                cells,
                total.bold()
            ));
        } else {
            lines.push(format!("{} {}{}  {}", index_str, name, cells, total));
        }
    }

    lines.join("\n")
}

/// Format a scoreboard as tab-separated values for scripting.
/// First line is a header; rows keep insertion order; unscored cells are empty.
pub fn format_scoreboard_tsv(board: &Scoreboard) -> String {
    let disciplines = board.competition().disciplines();

    let mut header = vec!["Competitor"];
    header.extend(disciplines.iter().map(|d| d.name));
    header.push("Total");

    let mut lines = vec![header.join("\t")];
    for entry in board.entries() {
        let mut row = vec![entry.competitor.clone()];
        row.extend((0..disciplines.len()).map(|i| score_cell(entry, i)));
        row.push(entry.total().to_string());
        lines.push(row.join("\t"));
    }
    lines.join("\n")
}

#[derive(Serialize)]
struct JsonBoard<'a> {
    competition: CompetitionType,
    disciplines: Vec<&'static str>,
    competitors: Vec<JsonEntry<'a>>,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    name: &'a str,
    scores: Vec<Option<u32>>,
    total: u64,
}

/// Format a scoreboard as pretty-printed JSON.
/// `scores` arrays follow the `disciplines` order; unscored entries are null.
pub fn format_scoreboard_json(board: &Scoreboard) -> serde_json::Result<String> {
    let view = JsonBoard {
        competition: board.competition(),
        disciplines: board.competition().disciplines().iter().map(|d| d.name).collect(),
        competitors: board
            .entries()
            .iter()
            .map(|e| JsonEntry {
                name: &e.competitor,
                scores: e.scores().to_vec(),
                total: e.total(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&view)
}
