//! Ticket export ingestion.
//!
//! Reads the uploaded CSV export into [`TicketRow`] structs for downstream
//! aggregation. Column mapping is header-based; the required columns are
//! validated up front so a malformed export fails as a whole instead of
//! silently producing an empty analysis.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use report_core::error::{ReportError, Result};
use report_core::models::TicketRow;
use tracing::{debug, warn};

/// Columns the analysis cannot run without.
const REQUIRED_COLUMNS: &[&str] = &[
    "Reporter",
    "Category",
    "Status",
    "Assigned To",
    "Category.1",
    "Status.1",
];

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a ticket export from `path`.
pub fn load_ticket_rows(path: &Path) -> Result<Vec<TicketRow>> {
    let file = std::fs::File::open(path).map_err(|source| ReportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = read_ticket_rows(std::io::BufReader::new(file))?;
    debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Core parsing logic. Accepts any `Read` source, useful for tests.
///
/// Rows that fail to deserialize are skipped with a logged warning; a missing
/// required column fails the whole load.
pub fn read_ticket_rows<R: Read>(reader: R) -> Result<Vec<TicketRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(ReportError::MissingColumn(column.to_string()));
        }
    }

    let mut rows: Vec<TicketRow> = Vec::new();
    let mut skipped = 0usize;

    for (idx, result) in rdr.deserialize::<TicketRow>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(err) => {
                // +2: one for the header row, one for 1-based numbering.
                warn!("Skipping export line {}: {}", idx + 2, err);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} malformed export rows", skipped);
    }

    Ok(rows)
}

/// The distinct, sorted set of non-empty worker names in the export.
///
/// A worker is anyone appearing in either the `Reporter` or the `Assigned To`
/// column; empty cells contribute nothing.
pub fn unique_workers(rows: &[TicketRow]) -> Vec<String> {
    let mut names: BTreeSet<&str> = BTreeSet::new();
    for row in rows {
        if !row.reporter.is_empty() {
            names.insert(row.reporter.as_str());
        }
        if !row.assigned_to.is_empty() {
            names.insert(row.assigned_to.as_str());
        }
    }
    names.into_iter().map(String::from).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const HEADER: &str = "Reporter,Category,Status,Assigned To,Category.1,Status.1";

    fn write_export(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    // ── read_ticket_rows ──────────────────────────────────────────────────────

    #[test]
    fn test_read_basic_export() {
        let data = format!(
            "{}\nalice,network,resolved,bob,network,inprogress\n",
            HEADER
        );
        let rows = read_ticket_rows(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].reporter, "alice");
        assert_eq!(rows[0].assigned_to, "bob");
        assert_eq!(rows[0].status, "resolved");
        assert_eq!(rows[0].status_alt, "inprogress");
    }

    #[test]
    fn test_read_empty_cells_become_empty_strings() {
        let data = format!("{}\n,network,resolved,bob,network,closed\n", HEADER);
        let rows = read_ticket_rows(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].reporter.is_empty());
    }

    #[test]
    fn test_read_missing_column_fails() {
        // No "Assigned To" column.
        let data = "Reporter,Category,Status,Category.1,Status.1\na,b,c,d,e\n";
        let err = read_ticket_rows(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Assigned To"));
    }

    #[test]
    fn test_read_extra_columns_ignored() {
        let data = format!(
            "Ticket ID,{},Priority\n42,alice,network,resolved,bob,network,closed,high\n",
            HEADER
        );
        let rows = read_ticket_rows(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].reporter, "alice");
    }

    #[test]
    fn test_read_short_rows_skipped() {
        let data = format!(
            "{}\nalice,network\nbob,network,closed,carol,network,resolved\n",
            HEADER
        );
        let rows = read_ticket_rows(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].reporter, "bob");
    }

    #[test]
    fn test_read_headers_only() {
        let data = format!("{}\n", HEADER);
        let rows = read_ticket_rows(data.as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    // ── load_ticket_rows ──────────────────────────────────────────────────────

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_export(
            dir.path(),
            "tickets.csv",
            &[HEADER, "alice,network,resolved,bob,network,closed"],
        );

        let rows = load_ticket_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = load_ticket_rows(Path::new("/tmp/does-not-exist-ticket-report.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    // ── unique_workers ────────────────────────────────────────────────────────

    fn row(reporter: &str, assigned_to: &str) -> TicketRow {
        TicketRow {
            reporter: reporter.to_string(),
            category: "network".to_string(),
            status: "resolved".to_string(),
            assigned_to: assigned_to.to_string(),
            category_alt: "network".to_string(),
            status_alt: "closed".to_string(),
        }
    }

    #[test]
    fn test_unique_workers_both_columns() {
        let rows = vec![row("alice", "bob"), row("carol", "alice")];
        assert_eq!(unique_workers(&rows), vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_unique_workers_skips_empty_cells() {
        let rows = vec![row("", "bob"), row("alice", "")];
        assert_eq!(unique_workers(&rows), vec!["alice", "bob"]);
    }

    #[test]
    fn test_unique_workers_empty_export() {
        assert!(unique_workers(&[]).is_empty());
    }
}
