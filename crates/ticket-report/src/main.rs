mod bootstrap;

use anyhow::Result;
use report_core::settings::Settings;
use report_data::aggregator;
use report_data::reader;
use report_data::store::ResultStore;
use report_ui::app::{App, ViewMode};

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Ticket Report v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "View: {}, Store: {}, Theme: {}",
        settings.view,
        settings.store.display(),
        settings.theme
    );

    match settings.view.as_str() {
        "dashboard" => {
            let store = ResultStore::new(settings.store.clone());
            let records = store.load()?;
            tracing::info!("Loaded {} saved analyses", records.len());

            let app = App::new(&settings.theme, ViewMode::Dashboard);
            app.run_dashboard(records)?;
        }

        "analyze" => {
            let rows = reader::load_ticket_rows(settings.export_file()?)?;

            if settings.list_workers {
                for worker in reader::unique_workers(&rows) {
                    println!("{}", worker);
                }
                return Ok(());
            }

            let request = settings.analysis_request()?;
            let analysis = aggregator::analyze_worker(
                &rows,
                &request.worker,
                request.start_date,
                request.end_date,
            );

            let save_status = if settings.save {
                let store = ResultStore::new(settings.store.clone());
                Some(store.append(&analysis.to_record())?)
            } else {
                None
            };

            let app = App::new(&settings.theme, ViewMode::Preview);
            app.run_preview(analysis, save_status)?;
        }

        unknown => {
            eprintln!("Unknown view mode: {}", unknown);
        }
    }

    Ok(())
}
