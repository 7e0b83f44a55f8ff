use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which side of the ticket export a computation reads.
///
/// Every export row carries two independent (person, status) column pairs:
/// the reporter view and the assignee view of the same ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Tickets assigned to a worker (`Assigned To` / `Status.1`).
    Assigned,
    /// Tickets reported by a worker (`Reporter` / `Status`).
    Reported,
}

/// One row of the uploaded ticket export.
///
/// Field names map to the export's column headers; an empty cell deserializes
/// to an empty string and is treated as absent by [`TicketRow::person`].
#[derive(Debug, Clone, Deserialize)]
pub struct TicketRow {
    /// Person who opened the ticket.
    #[serde(rename = "Reporter")]
    pub reporter: String,
    /// Ticket category in the reporter view.
    #[serde(rename = "Category")]
    pub category: String,
    /// Raw status string in the reporter view.
    #[serde(rename = "Status")]
    pub status: String,
    /// Person the ticket is assigned to.
    #[serde(rename = "Assigned To")]
    pub assigned_to: String,
    /// Ticket category in the assignee view.
    #[serde(rename = "Category.1")]
    pub category_alt: String,
    /// Raw status string in the assignee view.
    #[serde(rename = "Status.1")]
    pub status_alt: String,
}

impl TicketRow {
    /// The person on the given side of the row, or `None` for an empty cell.
    pub fn person(&self, role: Role) -> Option<&str> {
        let name = match role {
            Role::Assigned => self.assigned_to.as_str(),
            Role::Reported => self.reporter.as_str(),
        };
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// The raw status string on the given side of the row.
    pub fn raw_status(&self, role: Role) -> &str {
        match role {
            Role::Assigned => &self.status_alt,
            Role::Reported => &self.status,
        }
    }
}

/// Normalized ticket status used for aggregation.
///
/// Raw status strings that match none of the recognized labels fold into
/// [`StatusCategory::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Resolved,
    Closed,
    Assigned,
    Delayed,
    Feedback,
    InProgress,
    Other,
}

impl StatusCategory {
    /// The lowercase label used in breakdown tables and raw status matching.
    pub fn label(&self) -> &'static str {
        match self {
            StatusCategory::Resolved => "resolved",
            StatusCategory::Closed => "closed",
            StatusCategory::Assigned => "assigned",
            StatusCategory::Delayed => "delayed",
            StatusCategory::Feedback => "feedback",
            StatusCategory::InProgress => "inprogress",
            StatusCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One persisted row of the result store.
///
/// Field names map to the store's column headers. The percentage columns are
/// stored as rendered strings with a trailing `%`; the averages and the work
/// day total are numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Start of the reporting range.
    #[serde(rename = "Start Date")]
    pub start_date: NaiveDate,
    /// End of the reporting range (inclusive).
    #[serde(rename = "End Date")]
    pub end_date: NaiveDate,
    /// Worker the analysis was computed for.
    #[serde(rename = "Worker")]
    pub worker: String,
    /// Ticket count across all categories in the reporter view.
    #[serde(rename = "Total Reported Tickets")]
    pub total_reported: u64,
    /// Ticket count across all categories in the assignee view.
    #[serde(rename = "Total Assigned Tickets")]
    pub total_assigned: u64,
    /// Resolved ticket count in the reporter view.
    #[serde(rename = "Resolved Reported Tickets Count")]
    pub resolved_reported: u64,
    /// Resolved ticket count in the assignee view.
    #[serde(rename = "Resolved Assigned Tickets Count")]
    pub resolved_assigned: u64,
    /// Resolved share of reported tickets, e.g. `"33.33%"`.
    #[serde(rename = "Percentage of Resolved Reported Tickets")]
    pub resolved_reported_percentage: String,
    /// Resolved share of assigned tickets, e.g. `"33.33%"`.
    #[serde(rename = "Percentage of Resolved Assigned Tickets")]
    pub resolved_assigned_percentage: String,
    /// Business days per resolved assigned ticket; 0 when none were resolved.
    #[serde(rename = "Average Work Days per Assigned Resolved Ticket")]
    pub average_days_per_assigned: f64,
    /// Business days per resolved reported ticket; 0 when none were resolved.
    #[serde(rename = "Average Work Days per Reported Resolved Ticket")]
    pub average_days_per_reported: f64,
    /// Business days in the reporting range.
    #[serde(rename = "Total Work Days")]
    pub total_work_days: f64,
}
