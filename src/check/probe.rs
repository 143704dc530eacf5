//! Best-effort HTTPS probe.
//!
//! Policy carried from the source tool: any response at all means the name
//! resolves and serves, so it is treated as taken; a failed or timed-out
//! request is treated as available. This conflates network trouble with
//! availability and is documented as an accuracy limitation of the probe
//! profile, not something callers should rely on for registration decisions.

use async_trait::async_trait;
use std::time::Duration;

use crate::check::AvailabilityStrategy;

const USER_AGENT: &str = concat!("geo-domains/", env!("CARGO_PKG_VERSION"));

/// HEAD-request availability probe with a bounded timeout
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create HTTP client: {}. Using default.", e);
                reqwest::Client::new()
            });

        Self { client }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Probe a single domain. Response => taken, failure => available.
    pub async fn probe(&self, domain: &str) -> bool {
        let url = format!("https://{}", domain);
        match self.client.head(&url).send().await {
            Ok(response) => {
                tracing::debug!(
                    domain = %domain,
                    status = %response.status(),
                    "HTTP probe got a response, treating as taken"
                );
                false
            }
            Err(e) => {
                tracing::debug!(
                    domain = %domain,
                    error = %e,
                    "HTTP probe failed, treating as available"
                );
                true
            }
        }
    }
}

#[async_trait]
impl AvailabilityStrategy for HttpProbe {
    async fn estimate(&self, domain: &str, _population: u64) -> bool {
        self.probe(domain).await
    }

    fn name(&self) -> &'static str {
        "probe"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_creation() {
        let probe = HttpProbe::new(Duration::from_secs(5));
        assert_eq!(probe.name(), "probe");
    }

    #[tokio::test]
    async fn test_unresolvable_domain_reads_as_available() {
        let probe = HttpProbe::new(Duration::from_secs(2));
        // Reserved TLD can never resolve, so the request must fail
        assert!(probe.probe("no-such-host.invalid").await);
    }
}
