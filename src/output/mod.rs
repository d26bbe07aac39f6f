pub mod formatter;

pub use formatter::{
    format_disciplines, format_disciplines_tsv, format_score_json, format_score_line, format_score_tsv,
    format_scoreboard_json, format_scoreboard_table, format_scoreboard_tsv, should_use_colors,
};
