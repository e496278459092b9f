//! Deadline-bounded fetch of the orchestrator's apps endpoint.
//!
//! One HTTP GET runs in a spawned task that publishes its single result on a
//! oneshot channel; the caller races that against a timer with `select!`.
//! Whichever resolves first is final for the run. The losing side is not
//! cancelled, only abandoned — fine for a single-shot process, a resource
//! leak risk if this is ever embedded in a long-lived collector.

use std::error::Error;
use std::time::Duration;

use tokio::sync::oneshot;

use maraline_core::error::{MaralineError, Result};

/// Fixed sub-path of the status endpoint on the orchestrator.
const APPS_PATH: &str = "/v2/apps";

/// Split `username:password` on the first colon; both halves must be
/// non-empty. Passwords may contain further colons.
fn split_credentials(creds: &str) -> Result<(String, String)> {
    match creds.split_once(':') {
        Some((user, pass)) if !user.is_empty() && !pass.is_empty() => {
            Ok((user.to_string(), pass.to_string()))
        }
        _ => Err(MaralineError::BadCredentials),
    }
}

/// Comma-join the error with its full source chain for diagnostics.
fn describe_transport(e: &reqwest::Error) -> String {
    let mut parts = vec![e.to_string()];
    let mut src = e.source();
    while let Some(cause) = src {
        parts.push(cause.to_string());
        src = cause.source();
    }
    parts.join(", ")
}

async fn http_get(url: String, creds: Option<(String, String)>) -> Result<String> {
    let client = reqwest::Client::new();
    let mut req = client.get(&url);
    if let Some((user, pass)) = creds {
        req = req.basic_auth(user, Some(pass));
    }

    let resp = req
        .send()
        .await
        .map_err(|e| MaralineError::Transport(describe_transport(&e)))?;

    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        return Err(MaralineError::HttpStatus(status.to_string()));
    }
    resp.text()
        .await
        .map_err(|e| MaralineError::Transport(describe_transport(&e)))
}

/// Fetch `{base_url}/v2/apps` under a hard deadline.
///
/// Credential parsing happens before any network activity; a malformed pair
/// fails the run without a request. Whichever of {response, timer} resolves
/// first is the outcome; a late response is never observed.
pub async fn fetch_apps(
    base_url: &str,
    credentials: Option<&str>,
    timeout: Duration,
) -> Result<String> {
    let creds = match credentials {
        Some(c) => Some(split_credentials(c)?),
        None => None,
    };
    let url = format!("{base_url}{APPS_PATH}");

    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        // The receiver is gone when the timer already won; dropping the
        // result here is the abandonment described above.
        let _ = tx.send(http_get(url, creds).await);
    });

    tokio::select! {
        res = rx => match res {
            Ok(outcome) => outcome,
            Err(_) => Err(MaralineError::Internal(
                "fetch task dropped its result channel".into(),
            )),
        },
        _ = tokio::time::sleep(timeout) => Err(MaralineError::Timeout),
    }
}
