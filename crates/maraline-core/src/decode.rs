//! Permissive decoder for the apps response body.

use crate::model::{AppStatus, AppsResponse};

/// Decode the raw `/v2/apps` body into a list of apps, document order.
///
/// Malformed or non-conforming input (unparseable JSON, missing `apps`
/// field, wrong types) is logged and yields an empty list; decode problems
/// never abort a collection run.
pub fn decode_apps(raw: &str) -> Vec<AppStatus> {
    match serde_json::from_str::<AppsResponse>(raw) {
        Ok(resp) => resp.apps,
        Err(e) => {
            tracing::debug!(error = %e, "cannot parse apps JSON");
            Vec::new()
        }
    }
}
