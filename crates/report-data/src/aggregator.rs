//! Per-worker status aggregation.
//!
//! Classifies every status in a worker's ticket subset, tallies counts per
//! category, and derives percentages and the average resolution duration for
//! the reporting range.

use std::collections::HashMap;

use chrono::NaiveDate;
use report_core::classifier::classify;
use report_core::formatting::format_percentage;
use report_core::models::{AnalysisRecord, Role, StatusCategory, TicketRow};
use report_core::workdays::{average_days_per_resolved, business_days_between};
use tracing::debug;

/// Label of the synthetic summary row appended to every breakdown.
pub const TOTAL_LABEL: &str = "Total";

// ── StatusBreakdown ───────────────────────────────────────────────────────────

/// One rendered row of a per-role breakdown table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRow {
    /// Category label, or [`TOTAL_LABEL`] for the summary row.
    pub label: String,
    /// Tickets counted under this label.
    pub count: u64,
    /// Share of the total, e.g. `"33.33%"`.
    pub percentage: String,
}

/// Category tally for one worker in one role.
///
/// `rows` holds one entry per observed category, ordered by descending count
/// (label-ascending on ties), with the synthetic Total row last.
#[derive(Debug, Clone)]
pub struct StatusBreakdown {
    /// Rendered table rows, Total last.
    pub rows: Vec<BreakdownRow>,
    /// Tickets counted across all categories.
    pub total: u64,
    /// Tickets in the `resolved` category.
    pub resolved: u64,
}

impl StatusBreakdown {
    /// The stored percentage string for the resolved share.
    ///
    /// Falls back to `"0%"` when the role has no resolved tickets, matching
    /// the store's historical format.
    pub fn resolved_percentage(&self) -> String {
        if self.resolved == 0 {
            "0%".to_string()
        } else {
            format_percentage(self.resolved, self.total)
        }
    }
}

/// Classify and tally the statuses of `worker`'s tickets in one role.
pub fn tally_statuses(rows: &[TicketRow], worker: &str, role: Role) -> StatusBreakdown {
    let mut counts: HashMap<StatusCategory, u64> = HashMap::new();
    for row in rows {
        let Some(person) = row.person(role) else {
            continue;
        };
        if person != worker {
            continue;
        }
        *counts.entry(classify(row.raw_status(role))).or_insert(0) += 1;
    }

    let total: u64 = counts.values().sum();
    let resolved = counts
        .get(&StatusCategory::Resolved)
        .copied()
        .unwrap_or(0);

    let mut entries: Vec<(StatusCategory, u64)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.label().cmp(b.0.label())));

    let mut table_rows: Vec<BreakdownRow> = entries
        .into_iter()
        .map(|(category, count)| BreakdownRow {
            label: category.label().to_string(),
            count,
            percentage: format_percentage(count, total),
        })
        .collect();
    table_rows.push(BreakdownRow {
        label: TOTAL_LABEL.to_string(),
        count: total,
        percentage: format_percentage(total, total),
    });

    StatusBreakdown {
        rows: table_rows,
        total,
        resolved,
    }
}

// ── WorkerAnalysis ────────────────────────────────────────────────────────────

/// The full analysis for one worker over one reporting range.
#[derive(Debug, Clone)]
pub struct WorkerAnalysis {
    /// Worker the breakdowns were computed for.
    pub worker: String,
    /// Start of the reporting range.
    pub start_date: NaiveDate,
    /// End of the reporting range (inclusive).
    pub end_date: NaiveDate,
    /// Weekdays in the range.
    pub business_days: u64,
    /// Breakdown of tickets assigned to the worker.
    pub assigned: StatusBreakdown,
    /// Breakdown of tickets reported by the worker.
    pub reported: StatusBreakdown,
    /// Business days per resolved assigned ticket.
    pub average_days_per_assigned: f64,
    /// Business days per resolved reported ticket.
    pub average_days_per_reported: f64,
}

/// Run the whole aggregation for one worker and date range.
pub fn analyze_worker(
    rows: &[TicketRow],
    worker: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> WorkerAnalysis {
    let business_days = business_days_between(start_date, end_date);

    let assigned = tally_statuses(rows, worker, Role::Assigned);
    let reported = tally_statuses(rows, worker, Role::Reported);

    let average_days_per_assigned = average_days_per_resolved(business_days, assigned.resolved);
    let average_days_per_reported = average_days_per_resolved(business_days, reported.resolved);

    debug!(
        "Analyzed {}: {} assigned, {} reported over {} business days",
        worker, assigned.total, reported.total, business_days
    );

    WorkerAnalysis {
        worker: worker.to_string(),
        start_date,
        end_date,
        business_days,
        assigned,
        reported,
        average_days_per_assigned,
        average_days_per_reported,
    }
}

impl WorkerAnalysis {
    /// Convert the analysis into the result store's record shape.
    pub fn to_record(&self) -> AnalysisRecord {
        AnalysisRecord {
            start_date: self.start_date,
            end_date: self.end_date,
            worker: self.worker.clone(),
            total_reported: self.reported.total,
            total_assigned: self.assigned.total,
            resolved_reported: self.reported.resolved,
            resolved_assigned: self.assigned.resolved,
            resolved_reported_percentage: self.reported.resolved_percentage(),
            resolved_assigned_percentage: self.assigned.resolved_percentage(),
            average_days_per_assigned: self.average_days_per_assigned,
            average_days_per_reported: self.average_days_per_reported,
            total_work_days: self.business_days as f64,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
