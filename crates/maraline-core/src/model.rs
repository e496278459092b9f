//! Typed view of the orchestrator's `/v2/apps` response.

use serde::Deserialize;

/// One orchestrator-reported application.
///
/// Counters default to zero when the upstream omits them; `id` is mandatory.
/// Unknown fields are ignored — the real API carries far more keys than the
/// five gauges we read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppStatus {
    /// Hierarchical path identifier, e.g. `/team/service`.
    pub id: String,
    /// Desired instance count.
    #[serde(default)]
    pub instances: u32,
    #[serde(default, rename = "tasksStaged")]
    pub tasks_staged: u32,
    #[serde(default, rename = "tasksRunning")]
    pub tasks_running: u32,
    #[serde(default, rename = "tasksHealthy")]
    pub tasks_healthy: u32,
    #[serde(default, rename = "tasksUnhealthy")]
    pub tasks_unhealthy: u32,
}

/// Top-level envelope of `GET /v2/apps`.
#[derive(Debug, Deserialize)]
pub struct AppsResponse {
    pub apps: Vec<AppStatus>,
}
