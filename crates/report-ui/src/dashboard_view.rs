//! Dashboard view over the result store.
//!
//! Renders every saved analysis as a bordered overview table, bar charts of
//! total vs resolved tickets per worker in both roles, and the per-worker
//! average resolution split.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use report_core::formatting::format_days;
use report_core::models::AnalysisRecord;

use crate::components::bars::{CountBars, SplitBar};
use crate::themes::Theme;

/// Render the full dashboard into `area`.
pub fn render_dashboard(frame: &mut Frame, area: Rect, records: &[AnalysisRecord], theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_overview_table(frame, chunks[0], records, theme);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_count_chart(
        frame,
        chart_chunks[0],
        " Assigned vs Resolved by Worker ",
        records
            .iter()
            .map(|r| (r.worker.as_str(), r.total_assigned, r.resolved_assigned)),
        theme,
    );
    render_count_chart(
        frame,
        chart_chunks[1],
        " Reported vs Resolved by Worker ",
        records
            .iter()
            .map(|r| (r.worker.as_str(), r.total_reported, r.resolved_reported)),
        theme,
    );

    render_time_split(frame, chunks[2], records, theme);
}

/// Render a "no data" placeholder when the store is missing or empty.
pub fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No analysis data available", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "Run with --view analyze and --save to add data.",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Ticket Report "),
        ),
        area,
    );
}

// ── Internal ──────────────────────────────────────────────────────────────────

/// One row per stored record, columns mirroring the store header.
fn render_overview_table(
    frame: &mut Frame,
    area: Rect,
    records: &[AnalysisRecord],
    theme: &Theme,
) {
    let header_cells = [
        "Start",
        "End",
        "Worker",
        "Reported",
        "Assigned",
        "Res Rep",
        "Res Asn",
        "Rep %",
        "Asn %",
        "Avg Asn",
        "Avg Rep",
        "Days",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let data_rows: Vec<Row> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(r.start_date.to_string()),
                Cell::from(r.end_date.to_string()),
                Cell::from(r.worker.clone()),
                Cell::from(r.total_reported.to_string()),
                Cell::from(r.total_assigned.to_string()),
                Cell::from(r.resolved_reported.to_string()),
                Cell::from(r.resolved_assigned.to_string()),
                Cell::from(r.resolved_reported_percentage.clone()),
                Cell::from(r.resolved_assigned_percentage.clone()),
                Cell::from(format_days(r.average_days_per_assigned)),
                Cell::from(format_days(r.average_days_per_reported)),
                Cell::from(format_days(r.total_work_days)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(6),
    ];

    let table = Table::new(data_rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Saved Analyses "),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

/// A bar chart block: per record, a total bar above a resolved bar.
fn render_count_chart<'a>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    entries: impl Iterator<Item = (&'a str, u64, u64)>,
    theme: &Theme,
) {
    let entries: Vec<(&str, u64, u64)> = entries.collect();
    let max = entries.iter().map(|(_, total, _)| *total).max().unwrap_or(0);

    let mut lines: Vec<Line> = Vec::new();
    for &(worker, total, resolved) in &entries {
        lines.extend(
            CountBars {
                worker,
                total,
                resolved,
                max,
                theme,
            }
            .to_lines(),
        );
    }

    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title(title.to_string()))
            .style(theme.text),
        area,
    );
}

/// Per-record split of the average resolution time between the two roles.
fn render_time_split(frame: &mut Frame, area: Rect, records: &[AnalysisRecord], theme: &Theme) {
    let lines: Vec<Line> = records
        .iter()
        .map(|r| {
            SplitBar {
                worker: &r.worker,
                assigned_days: r.average_days_per_assigned,
                reported_days: r.average_days_per_reported,
                theme,
            }
            .to_line()
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Average Work Days per Resolved Ticket "),
            )
            .style(theme.text),
        area,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────
