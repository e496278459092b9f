//! Line-protocol rendering for app status rows.
//!
//! One line per app: measurement `marathon_apps`, a single `app_name` tag,
//! and five integer fields carrying the `i` suffix required by the line
//! protocol's integer typing.

use crate::model::AppStatus;

/// Measurement name for every emitted line.
pub const MEASUREMENT: &str = "marathon_apps";

/// Flatten a hierarchical app id into a tag-safe name.
///
/// Every `/` becomes `_`; a single leading `_` (from a rooted path) is then
/// stripped. Exactly one strip: `//x` keeps its second underscore.
pub fn normalize_app_name(id: &str) -> String {
    let flat = id.replace('/', "_");
    match flat.strip_prefix('_') {
        Some(rest) => rest.to_string(),
        None => flat,
    }
}

/// Render one line per app, newline-joined, no trailing newline.
///
/// Order follows the input list; duplicate normalized names are kept as
/// separate lines rather than merged.
pub fn encode_apps(apps: &[AppStatus]) -> String {
    let lines: Vec<String> = apps.iter().map(render_line).collect();
    lines.join("\n")
}

fn render_line(app: &AppStatus) -> String {
    format!(
        "{MEASUREMENT},app_name={} instances={}i,tasks_staged={}i,tasks_running={}i,tasks_healthy={}i,tasks_unhealthy={}i",
        normalize_app_name(&app.id),
        app.instances,
        app.tasks_staged,
        app.tasks_running,
        app.tasks_healthy,
        app.tasks_unhealthy,
    )
}
