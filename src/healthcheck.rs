use std::time::Duration;

use thiserror::Error;

/// Port the server binds when `HTTP_PORT` is unset.
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Probe timeout. Container orchestrators call this on a tight interval, so
/// a hung server must fail fast rather than pile up probes.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
#[error("Healthcheck failed: {0}")]
pub struct HealthcheckError(String);

/// Probe the health endpoint on the default port.
pub async fn healthcheck() -> Result<(), HealthcheckError> {
    healthcheck_with_port(DEFAULT_HTTP_PORT).await
}

/// Probe `GET /v1/health` on the given port. Succeeds on any 2xx status.
pub async fn healthcheck_with_port(port: u16) -> Result<(), HealthcheckError> {
    let client = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
        .map_err(|e| HealthcheckError(format!("Failed to create HTTP client: {e}")))?;

    let resp = client
        .get(format!("http://127.0.0.1:{port}/v1/health"))
        .send()
        .await
        .map_err(|e| HealthcheckError(format!("Request failed: {e}")))?;

    match resp.status() {
        s if s.is_success() => Ok(()),
        s => Err(HealthcheckError(format!(
            "Health endpoint returned status: {s}"
        ))),
    }
}
