//! Analysis preview view.
//!
//! Shows the per-role breakdown tables for one worker and date range, the
//! range summary, and the outcome of a `--save` request.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use report_core::formatting::format_days;
use report_data::aggregator::{StatusBreakdown, WorkerAnalysis, TOTAL_LABEL};
use report_data::store::AppendOutcome;

use crate::themes::Theme;

/// Render the preview for one analysis into `area`.
pub fn render_preview(
    frame: &mut Frame,
    area: Rect,
    analysis: &WorkerAnalysis,
    save_status: Option<AppendOutcome>,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    render_summary(frame, chunks[0], analysis, theme);

    let table_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_breakdown_table(
        frame,
        table_chunks[0],
        format!(" Assigned to {} ", analysis.worker),
        &analysis.assigned,
        theme,
    );
    render_breakdown_table(
        frame,
        table_chunks[1],
        format!(" Reported by {} ", analysis.worker),
        &analysis.reported,
        theme,
    );

    render_save_status(frame, chunks[2], save_status, theme);
}

// ── Internal ──────────────────────────────────────────────────────────────────

/// Worker, range, and average figures above the tables.
fn render_summary(frame: &mut Frame, area: Rect, analysis: &WorkerAnalysis, theme: &Theme) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Worker: ", theme.label),
            Span::styled(analysis.worker.clone(), theme.value),
        ]),
        Line::from(vec![
            Span::styled("Range: ", theme.label),
            Span::styled(
                format!(
                    "{} .. {} ({} business days)",
                    analysis.start_date, analysis.end_date, analysis.business_days
                ),
                theme.value,
            ),
        ]),
        Line::from(vec![
            Span::styled("Avg work days per resolved ticket: ", theme.label),
            Span::styled(
                format!(
                    "assigned {}, reported {}",
                    format_days(analysis.average_days_per_assigned),
                    format_days(analysis.average_days_per_reported),
                ),
                theme.value,
            ),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Ticket Analysis "),
        ),
        area,
    );
}

/// One bordered category/count/percentage table, Total row highlighted.
fn render_breakdown_table(
    frame: &mut Frame,
    area: Rect,
    title: String,
    breakdown: &StatusBreakdown,
    theme: &Theme,
) {
    let header_cells = ["Category", "Count", "Percentage"]
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = breakdown
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if row.label == TOTAL_LABEL {
                theme.table_total
            } else if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(row.label.clone()),
                Cell::from(row.count.to_string()),
                Cell::from(row.percentage.clone()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(theme.text);

    frame.render_widget(table, area);
}

/// The save outcome (or the hint that none was requested).
fn render_save_status(
    frame: &mut Frame,
    area: Rect,
    save_status: Option<AppendOutcome>,
    theme: &Theme,
) {
    let line = match save_status {
        Some(AppendOutcome::Saved) => {
            Line::from(Span::styled("Data saved successfully.", theme.success))
        }
        Some(AppendOutcome::Duplicate) => Line::from(Span::styled(
            "Entry already exists with the same Start Date, End Date, and Worker!",
            theme.warning,
        )),
        None => Line::from(Span::styled(
            "Preview only. Run again with --save to append this analysis to the store.",
            theme.dim,
        )),
    };

    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Save ")),
        area,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────
