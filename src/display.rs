//! Plain-text rendering of a weekly grid.
//!
//! Day rows, shift columns, comma-joined names, `-` for an empty cell.
//! Rendering is read-only; it consumes the grid the allocator produced.

use crate::models::{Day, Roster, Shift};

const COL_WIDTH: usize = 28;

/// Renders the grid as an aligned text table.
pub fn render_table(roster: &Roster) -> String {
    let header = format!(
        "{:<5} | {:<w$} | {:<w$} | {:<w$}",
        "Day",
        "Morning",
        "Afternoon",
        "Evening",
        w = COL_WIDTH
    );
    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.len()));
    out.push('\n');
    for day in Day::ALL {
        let cells: Vec<String> = Shift::ALL
            .into_iter()
            .map(|shift| {
                let names = roster.cell(day, shift);
                if names.is_empty() {
                    "-".to_string()
                } else {
                    names.join(", ")
                }
            })
            .collect();
        out.push_str(&format!(
            "{:<5} | {:<w$} | {:<w$} | {:<w$}\n",
            day.label(),
            cells[0],
            cells[1],
            cells[2],
            w = COL_WIDTH
        ));
    }
    out
}
