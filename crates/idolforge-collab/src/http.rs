use std::path::Path;
use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::CollabError;

/// Send `request` with a hard timeout and turn non-2xx replies into
/// [`CollabError::Status`].
pub(crate) async fn send(
    service: &'static str,
    request: RequestBuilder,
    timeout: Duration,
) -> Result<Response, CollabError> {
    let response = request
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify(service, timeout, e))?;

    let status = response.status();
    debug!(service, %status, "collaborator replied");
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CollabError::Status {
            service,
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

pub(crate) fn classify(service: &'static str, timeout: Duration, err: reqwest::Error) -> CollabError {
    if err.is_timeout() {
        CollabError::Timeout {
            service,
            secs: timeout.as_secs(),
        }
    } else {
        CollabError::Http {
            service,
            source: err,
        }
    }
}

/// Write `bytes` to `path`, creating parent directories.
pub(crate) async fn save(path: &Path, bytes: &[u8]) -> Result<(), CollabError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

pub(crate) fn require_key<'a>(
    key: Option<&'a str>,
    service: &'static str,
    env_var: &'static str,
) -> Result<&'a str, CollabError> {
    key.ok_or(CollabError::NotConfigured { service, env_var })
}
