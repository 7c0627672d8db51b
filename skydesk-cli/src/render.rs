use skydesk_console::present::{self, DetailSection, TABLE_HEADERS};
use skydesk_console::{BookingStats, ConsoleState, TableBody};
use skydesk_shared::Booking;
use std::fmt::Write;

pub fn stats_line(stats: &BookingStats) -> String {
    present::stats_cards(stats)
        .iter()
        .map(|card| format!("{}: {}", card.title, card.value))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Plain-text rendering of the bookings table and its pagination footer.
pub fn table(state: &ConsoleState) -> String {
    let rows: Vec<[String; 5]> = match state.table_body() {
        TableBody::Loading => return "Loading bookings...\n".to_string(),
        TableBody::Failed(message) => return format!("{}\n", message),
        TableBody::Empty => return format!("{}\n", present::EMPTY_TABLE_TEXT),
        TableBody::Rows(rows) => rows.into_iter().map(present::table_row).collect(),
    };

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = TABLE_HEADERS.map(str::to_string);
    for row in std::iter::once(&header).chain(rows.iter()) {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| pad(cell, *width))
            .collect();
        let _ = writeln!(out, "{}", cells.join("  ").trim_end());
    }
    let _ = writeln!(out, "{}", state.view.range_label());
    out
}

pub fn detail(booking: &Booking) -> String {
    let mut out = String::from("Booking Details\n");
    for DetailSection { title, fields } in present::detail_sections(booking) {
        let _ = writeln!(out, "\n{}", title);
        for (label, value) in fields {
            let _ = writeln!(out, "  {:<14}{}", label, value);
        }
    }
    out
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{}{}", cell, " ".repeat(fill))
}
