//! Single-shot collection pipeline: fetch -> decode -> encode.

use maraline_core::{decode, lineproto};

use crate::cli::Settings;
use crate::fetch;

/// Run one collection cycle and return the finished metrics blob.
///
/// A fetch failure is logged and downgrades to an empty body, which decodes
/// to zero apps and encodes to an empty string; the run itself never fails.
pub async fn collect(settings: &Settings) -> String {
    let body = match fetch::fetch_apps(
        &settings.url,
        settings.basic_auth.as_deref(),
        settings.timeout,
    )
    .await
    {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "fetch failed");
            String::new()
        }
    };

    let apps = decode::decode_apps(&body);
    lineproto::encode_apps(&apps)
}
