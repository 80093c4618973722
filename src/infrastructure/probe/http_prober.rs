//! HEAD-request liveness prober.

use super::service::LivenessProber;
use crate::domain::Liveness;
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

/// Probes URLs with a single HEAD request (no body transfer).
///
/// Classification:
/// - success-class status → [`Liveness::Live`]
/// - 404 / 410 → [`Liveness::Gone`]
/// - any other status, transport failure, or timeout → [`Liveness::Error`]
///
/// The shared client's timeout applies; an expired timeout surfaces as
/// [`Liveness::Error`], never a hang.
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// Creates a prober using the given shared HTTP client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LivenessProber for HttpProber {
    async fn probe(&self, url: &str) -> Liveness {
        match self.client.head(url).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    debug!(url, %status, "probe: live");
                    Liveness::Live
                } else if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
                    debug!(url, %status, "probe: gone");
                    Liveness::Gone
                } else {
                    warn!(url, %status, "probe: unexpected status");
                    Liveness::Error
                }
            }
            Err(e) => {
                warn!(url, error = %e, "probe: request failed");
                Liveness::Error
            }
        }
    }
}
