//! # Rendering Module
//!
//! Player records become either a boxed text table or pretty JSON. Layout is
//! computed on plain text using display widths; styling is applied afterwards so
//! ANSI codes never disturb alignment.

use super::setup::OutputMode;
use super::styles::{BORDER_STYLE, HEADER_STYLE};
use abctl::model::Player;
use chrono::{DateTime, Utc};
use console::Style;
use unicode_width::UnicodeWidthStr;

pub const HEADERS: [&str; 7] = ["ID", "Name", "Version", "Author", "Path", "Created", "Updated"];
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Columns holding numbers are right-aligned.
const NUMERIC: [bool; 7] = [true, false, true, true, false, false, false];

type Row = [String; 7];

/// Renders players for the chosen output mode.
pub fn render_players(players: &[Player], mode: OutputMode) -> serde_json::Result<String> {
    match mode {
        OutputMode::Table => Ok(render_players_table(players)),
        OutputMode::Json => serde_json::to_string_pretty(players).map(|s| s + "\n"),
    }
}

pub fn render_players_table(players: &[Player]) -> String {
    render_players_table_internal(players, None)
}

fn render_players_table_internal(players: &[Player], use_color: Option<bool>) -> String {
    let header: Row = HEADERS.map(str::to_string);
    let rows: Vec<Row> = players.iter().map(player_row).collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let header_style = styled(&HEADER_STYLE, use_color);
    let border_style = styled(&BORDER_STYLE, use_color);
    let border = format!("{}\n", border_style.apply_to(border_line(&widths)));

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&format_row(&header, &widths, &header_style, false));
    out.push_str(&border);
    if !rows.is_empty() {
        for row in &rows {
            out.push_str(&format_row(row, &widths, &Style::new(), true));
        }
        out.push_str(&border);
    }
    out
}

fn styled(base: &Style, use_color: Option<bool>) -> Style {
    match use_color {
        Some(enabled) => base.clone().force_styling(enabled),
        None => base.clone(),
    }
}

fn player_row(player: &Player) -> Row {
    [
        player.id.to_string(),
        single_line(&player.name),
        player.version.to_string(),
        player.author_id.to_string(),
        single_line(&player.path),
        format_time(player.created_at),
        format_time(player.updated_at),
    ]
}

fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format(TIME_FORMAT).to_string()
}

fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn format_row(cells: &Row, widths: &[usize], style: &Style, align_numbers: bool) -> String {
    let mut line = String::from("|");
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let fill = " ".repeat(width.saturating_sub(cell.width()));
        let padded = if align_numbers && NUMERIC[i] {
            format!("{}{}", fill, cell)
        } else {
            format!("{}{}", cell, fill)
        };
        line.push_str(&format!(" {} |", style.apply_to(padded)));
    }
    line.push('\n');
    line
}
