use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Per-worker ticket resolution reporting
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ticket-report",
    about = "Per-worker ticket resolution reporting",
    version
)]
pub struct Settings {
    /// View to open
    #[arg(long, default_value = "dashboard", value_parser = ["dashboard", "analyze"])]
    pub view: String,

    /// Ticket export CSV to analyze
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Worker name as it appears in the Reporter / Assigned To columns
    #[arg(long)]
    pub worker: Option<String>,

    /// Start of the reporting range (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// End of the reporting range (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Append the analysis to the result store
    #[arg(long)]
    pub save: bool,

    /// Print the workers found in the export and exit
    #[arg(long)]
    pub list_workers: bool,

    /// Result store path
    #[arg(long, default_value = "ticket_analysis_results.csv")]
    pub store: PathBuf,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Clear saved configuration
    #[arg(long)]
    pub clear: bool,
}

// ── AnalysisRequest ────────────────────────────────────────────────────────────

/// Validated inputs for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Ticket export to read.
    pub file: PathBuf,
    /// Worker to compute the breakdown for.
    pub worker: String,
    /// Start of the reporting range.
    pub start_date: NaiveDate,
    /// End of the reporting range (inclusive).
    pub end_date: NaiveDate,
}

// ── LastUsedParams ─────────────────────────────────────────────────────────────

/// Persisted last-used parameters saved to `~/.ticket-report/last_used.json`.
///
/// Only presentation-level values persist: the view is deliberately excluded
/// because an `analyze` run cannot start without its per-run flags.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct LastUsedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<PathBuf>,
}

impl LastUsedParams {
    /// Return the default path to the persisted config file.
    /// Uses `~/.ticket-report/last_used.json`.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Return the config path rooted at `base_dir` (used for testing).
    pub fn config_path_in(base_dir: &Path) -> PathBuf {
        base_dir.join(".ticket-report").join("last_used.json")
    }

    /// Load persisted params from the default path.
    /// Returns `Default` when the file is absent or cannot be parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load persisted params from an explicit path.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Atomically write params to the default path, creating parent
    /// directories if needed.
    pub fn save(&self) -> std::result::Result<(), std::io::Error> {
        self.save_to(&Self::config_path())
    }

    /// Atomically write params to an explicit path.
    pub fn save_to(&self, path: &Path) -> std::result::Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;

        // Write to a temp file then rename for atomicity.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }

    /// Delete the config file at an explicit path if it exists.
    pub fn clear_at(path: &Path) -> std::result::Result<(), std::io::Error> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments, merge with last-used params where no explicit CLI
    /// value was provided, and persist the result.
    pub fn load_with_last_used() -> Self {
        Self::load_with_last_used_impl(
            std::env::args_os().collect(),
            &LastUsedParams::config_path(),
        )
    }

    /// Full implementation – accepts args and an explicit config path so that
    /// tests can redirect to a temporary directory.
    pub fn load_with_last_used_impl(
        args: Vec<std::ffi::OsString>,
        config_path: &Path,
    ) -> Self {
        // Build raw ArgMatches so we can query ValueSource.
        let matches = Settings::command().get_matches_from(args.clone());

        // Parse into the typed struct using the same args.
        let mut settings = Settings::parse_from(args);

        if settings.clear {
            let _ = LastUsedParams::clear_at(config_path);
            return Self::apply_debug_override(settings);
        }

        let last = LastUsedParams::load_from(config_path);

        // Merge last-used values for fields that were NOT explicitly set on
        // the command line (CLI always wins).
        if !is_arg_explicitly_set(&matches, "theme") {
            if let Some(v) = last.theme {
                settings.theme = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "store") {
            if let Some(v) = last.store {
                settings.store = v;
            }
        }

        settings = Self::apply_debug_override(settings);

        // Persist current settings for next run.
        let params = LastUsedParams::from(&settings);
        let _ = params.save_to(config_path);

        settings
    }

    /// `--debug` forces the debug log level.
    fn apply_debug_override(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    // ── Validation ────────────────────────────────────────────────────────────

    /// The ticket export path, required by the `analyze` view.
    pub fn export_file(&self) -> Result<&Path> {
        self.file
            .as_deref()
            .ok_or_else(|| ReportError::Config("--view analyze requires --file".to_string()))
    }

    /// Validate the flags needed to compute one worker analysis.
    ///
    /// Requires `--file`, `--worker`, `--start-date`, and `--end-date`, with
    /// the start date not after the end date.
    pub fn analysis_request(&self) -> Result<AnalysisRequest> {
        let file = self.export_file()?.to_path_buf();
        let worker = self
            .worker
            .clone()
            .ok_or_else(|| ReportError::Config("--view analyze requires --worker".to_string()))?;
        let start_date = self.start_date.ok_or_else(|| {
            ReportError::Config("--view analyze requires --start-date".to_string())
        })?;
        let end_date = self
            .end_date
            .ok_or_else(|| ReportError::Config("--view analyze requires --end-date".to_string()))?;

        if start_date > end_date {
            return Err(ReportError::Config(format!(
                "start date {} is after end date {}",
                start_date, end_date
            )));
        }

        Ok(AnalysisRequest {
            file,
            worker,
            start_date,
            end_date,
        })
    }
}

// ── Conversion ─────────────────────────────────────────────────────────────────

impl From<&Settings> for LastUsedParams {
    fn from(s: &Settings) -> Self {
        LastUsedParams {
            theme: Some(s.theme.clone()),
            store: Some(s.store.clone()),
        }
    }
}

// ── Helper: check if an arg was explicitly set on the command line ─────────────

/// Returns `true` when `name` was supplied explicitly on the command line
/// (not via default value or environment variable).
fn is_arg_explicitly_set(matches: &clap::ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(clap::parser::ValueSource::CommandLine)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
