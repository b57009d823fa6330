//! Summary table rendering.

use crate::ping::types::ReportRow;
use crate::report::severity::Severity;
use crossterm::style::{style, Color, Stylize};

/// Table title.
pub const TITLE: &str = "Ping Results Summary";

const HEADERS: [&str; 10] = [
    "Target",
    "IP Address",
    "Transmitted",
    "Received",
    "Packet Loss (%)",
    "Timeouts",
    "RTT Min",
    "RTT Avg",
    "RTT Max",
    "RTT StdDev",
];

/// Columns that are left aligned; the rest are numbers, right aligned.
const LEFT_ALIGNED: usize = 2;

const COLUMN_GAP: &str = "  ";

struct Cell {
    text: String,
    color: Option<Color>,
}

impl Cell {
    fn plain(text: impl ToString) -> Self {
        Self {
            text: text.to_string(),
            color: None,
        }
    }

    fn colored(text: impl ToString, color: Option<Color>) -> Self {
        Self {
            text: text.to_string(),
            color,
        }
    }
}

/// Sort rows by the position of their name in `display_order`.
///
/// Names are validated against the display order at startup; a row whose
/// name is somehow absent sorts last.
#[must_use]
pub fn sort_rows(mut rows: Vec<ReportRow>, display_order: &[String]) -> Vec<ReportRow> {
    rows.sort_by_key(|row| {
        display_order
            .iter()
            .position(|name| *name == row.name)
            .unwrap_or(usize::MAX)
    });
    rows
}

/// Sort rows into display order and format them as a colored table.
#[must_use]
pub fn render(rows: Vec<ReportRow>, display_order: &[String]) -> String {
    let rows = sort_rows(rows, display_order);
    let cells: Vec<Vec<Cell>> = rows.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.text.chars().count());
        }
    }
    let total_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);

    let mut out = String::new();
    out.push_str(&style(format!("{TITLE:^total_width$}")).bold().to_string());
    out.push_str("\n\n");

    let header: Vec<String> = HEADERS
        .iter()
        .zip(&widths)
        .enumerate()
        .map(|(idx, (h, w))| style(pad(h, *w, idx)).magenta().bold().to_string())
        .collect();
    out.push_str(&header.join(COLUMN_GAP));
    out.push('\n');
    out.push_str(&"-".repeat(total_width));
    out.push('\n');

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(idx, (cell, w))| {
                let padded = pad(&cell.text, *w, idx);
                match cell.color {
                    Some(color) => style(padded).with(color).to_string(),
                    None => padded,
                }
            })
            .collect();
        out.push_str(&line.join(COLUMN_GAP));
        out.push('\n');
    }

    out
}

fn row_cells(row: &ReportRow) -> Vec<Cell> {
    let stats = &row.stats;
    vec![
        Cell::colored(&row.name, Some(Color::Cyan)),
        Cell::colored(&row.address, Some(Color::Cyan)),
        Cell::plain(&stats.packets_transmitted),
        Cell::plain(&stats.packets_received),
        Cell::colored(
            stats.packet_loss,
            Severity::of_packet_loss(stats.packet_loss).color(),
        ),
        Cell::colored(
            stats.timeout_count,
            Severity::of_timeouts(stats.timeout_count).color(),
        ),
        Cell::plain(&stats.rtt.min),
        Cell::plain(&stats.rtt.avg),
        Cell::plain(&stats.rtt.max),
        Cell::plain(&stats.rtt.stddev),
    ]
}

fn pad(text: &str, width: usize, column: usize) -> String {
    if column < LEFT_ALIGNED {
        format!("{text:<width$}")
    } else {
        format!("{text:>width$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ping::parser::parse_output;
    use crate::ping::types::HostEntry;

    fn row(name: &str, address: &str, output: &str) -> ReportRow {
        ReportRow::new(HostEntry::new(name, address), parse_output(output))
    }

    fn order() -> Vec<String> {
        vec!["Router".into(), "Modem".into(), "Google DNS".into()]
    }

    fn completion_order_rows() -> Vec<ReportRow> {
        vec![
            row(
                "Google DNS",
                "8.8.8.8",
                "10 packets transmitted, 9 packets received, 10.0% packet loss\n\
                 round-trip min/avg/max/stddev = 11.1/12.2/13.3/0.4 ms",
            ),
            row("Modem", "10.0.0.1", "Request timeout for icmp_seq 0"),
            row(
                "Router",
                "192.168.1.1",
                "10 packets transmitted, 10 packets received, 0.0% packet loss\n\
                 round-trip min/avg/max/stddev = 1.0/2.0/3.0/0.5 ms",
            ),
        ]
    }

    #[test]
    fn test_sort_rows_by_display_order() {
        let sorted = sort_rows(completion_order_rows(), &order());
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Router", "Modem", "Google DNS"]);
    }

    #[test]
    fn test_sort_rows_unknown_name_last() {
        let mut rows = completion_order_rows();
        rows.insert(0, row("Switch", "192.168.1.2", ""));
        let sorted = sort_rows(rows, &order());
        assert_eq!(sorted.last().unwrap().name, "Switch");
    }

    #[test]
    fn test_render_rows_in_display_order() {
        let table = render(completion_order_rows(), &order());

        assert!(table.contains(TITLE));
        assert!(table.contains("Packet Loss (%)"));

        let router = table.find("Router").unwrap();
        let modem = table.find("Modem").unwrap();
        let dns = table.find("Google DNS").unwrap();
        assert!(router < modem && modem < dns);
    }

    #[test]
    fn test_render_values_and_placeholders() {
        let table = render(completion_order_rows(), &order());

        assert!(table.contains("192.168.1.1"));
        assert!(table.contains("10.0"));
        assert!(table.contains("12.2"));
        assert!(table.contains("N/A"));
        assert!(table.contains("Error"));
    }

    #[test]
    fn test_render_one_line_per_row() {
        let table = render(completion_order_rows(), &order());
        // title, blank line, header, separator, three rows
        assert_eq!(table.lines().count(), 7);
    }
}
