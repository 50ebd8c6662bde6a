//! CLI smoke entry point.
//!
//! # Responsibility
//! - Build an `AppContext` from an optional JSON config path.
//! - Print the core version and dashboard metrics for a quick sanity check.

use clientdesk_core::{AppContext, CoreConfig, DashboardMetrics};
use log::error;
use std::path::Path;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => match CoreConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("clientdesk: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => CoreConfig::default(),
    };

    let context = match AppContext::from_config(&config) {
        Ok(context) => context,
        Err(err) => {
            error!("event=cli_start module=cli status=error error={err}");
            eprintln!("clientdesk: {err}");
            return ExitCode::FAILURE;
        }
    };

    let metrics = DashboardMetrics::collect(&context).await;
    println!("clientdesk_core version={}", clientdesk_core::core_version());
    println!("total_clients={}", metrics.total_clients);
    println!("active_projects={}", metrics.active_projects);
    println!("completed_projects={}", metrics.completed_projects);
    println!("pending_tasks={}", metrics.pending_tasks);
    println!("unread_notifications={}", metrics.unread_notifications);
    ExitCode::SUCCESS
}
