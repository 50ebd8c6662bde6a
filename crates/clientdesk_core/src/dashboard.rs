//! Dashboard headline metrics.

use crate::context::AppContext;
use crate::model::project::ProjectStatus;

/// Counts shown on the dashboard landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardMetrics {
    pub total_clients: usize,
    /// Projects `In Progress` or in `Review`.
    pub active_projects: usize,
    pub completed_projects: usize,
    pub pending_tasks: usize,
    pub unread_notifications: usize,
}

impl DashboardMetrics {
    /// Loads every store concurrently and tallies the counts.
    pub async fn collect(context: &AppContext) -> Self {
        let (clients, projects, tasks, unread) = tokio::join!(
            context.clients().get_all(),
            context.projects().get_all(),
            context.tasks().get_all(),
            context.notifications().get_unread(),
        );

        Self {
            total_clients: clients.len(),
            active_projects: projects.iter().filter(|p| p.status.is_active()).count(),
            completed_projects: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Completed)
                .count(),
            pending_tasks: tasks.iter().filter(|t| !t.completed).count(),
            unread_notifications: unread.len(),
        }
    }
}
