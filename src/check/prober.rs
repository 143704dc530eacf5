//! Cached multi-method availability prober.
//!
//! Lookup order per domain: fresh cache verdict, then a WHOIS-style JSON
//! API, then DNS-over-HTTPS, then the HTTP probe. The first method that
//! yields a definite boolean wins; methods that error or return unusable
//! data count as inconclusive and fall through. If everything is
//! inconclusive the verdict defaults to taken (fail-closed). Whatever is
//! decided gets cached before returning.

#[cfg(any(feature = "whois", feature = "dns"))]
use serde::Deserialize;
use std::sync::Arc;

use async_trait::async_trait;

use crate::check::cache::{Clock, VerdictCache};
use crate::check::probe::HttpProbe;
use crate::check::AvailabilityStrategy;
use crate::types::CheckConfig;

#[cfg(feature = "whois")]
const WHOIS_API_BASE: &str = "https://api.whoisjson.com/v1";
#[cfg(feature = "dns")]
const DNS_API_BASE: &str = "https://dns.google/resolve";

const USER_AGENT: &str = concat!("geo-domains/", env!("CARGO_PKG_VERSION"));

/// WHOIS -> DNS -> HTTP chain with a TTL verdict cache
pub struct CachedProber {
    client: reqwest::Client,
    cache: VerdictCache,
    probe: HttpProbe,
}

impl CachedProber {
    pub fn new(config: &CheckConfig) -> Self {
        let cache = VerdictCache::new(config.cache_ttl);
        Self::with_cache(config, cache)
    }

    /// Construct with an externally built cache (injectable clock for tests)
    pub fn with_cache(config: &CheckConfig, cache: VerdictCache) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create HTTP client: {}. Using default.", e);
                reqwest::Client::new()
            });

        let probe = HttpProbe::with_client(client.clone());

        Self {
            client,
            cache,
            probe,
        }
    }

    pub fn with_clock(config: &CheckConfig, clock: Arc<dyn Clock>) -> Self {
        let cache = VerdictCache::with_clock(config.cache_ttl, clock);
        Self::with_cache(config, cache)
    }

    pub fn cache(&self) -> &VerdictCache {
        &self.cache
    }

    /// WHOIS-style registration lookup; `None` is inconclusive
    #[cfg(feature = "whois")]
    async fn check_whois(&self, domain: &str) -> Option<bool> {
        #[derive(Deserialize)]
        struct WhoisRecord {
            #[serde(default)]
            registered: bool,
        }

        let url = format!("{}/{}", WHOIS_API_BASE, domain);
        let response = self.client.get(&url).send().await.ok()?;
        if !response.status().is_success() {
            tracing::debug!(domain = %domain, status = %response.status(), "WHOIS lookup inconclusive");
            return None;
        }

        let record: WhoisRecord = response.json().await.ok()?;
        tracing::debug!(domain = %domain, registered = record.registered, "WHOIS lookup answered");
        Some(!record.registered)
    }

    /// DNS resolution lookup; NXDOMAIN means available, any other
    /// resolution status means the name exists. `None` is inconclusive.
    #[cfg(feature = "dns")]
    async fn check_dns(&self, domain: &str) -> Option<bool> {
        #[derive(Deserialize)]
        struct DnsAnswer {
            #[serde(rename = "Status")]
            status: u32,
        }

        // RCODE 3 = NXDOMAIN
        let url = format!("{}?name={}&type=A", DNS_API_BASE, domain);
        let response = self.client.get(&url).send().await.ok()?;
        if !response.status().is_success() {
            tracing::debug!(domain = %domain, status = %response.status(), "DNS lookup inconclusive");
            return None;
        }

        let answer: DnsAnswer = response.json().await.ok()?;
        tracing::debug!(domain = %domain, rcode = answer.status, "DNS lookup answered");
        Some(answer.status == 3)
    }

    /// Run the method chain for one uncached domain
    async fn resolve(&self, domain: &str) -> bool {
        #[cfg(feature = "whois")]
        if let Some(verdict) = self.check_whois(domain).await {
            return verdict;
        }

        #[cfg(feature = "dns")]
        if let Some(verdict) = self.check_dns(domain).await {
            return verdict;
        }

        // The probe's failure policy already maps every outcome to a
        // verdict; anything that still slips through defaults to taken.
        self.probe.probe(domain).await
    }
}

#[async_trait]
impl AvailabilityStrategy for CachedProber {
    async fn estimate(&self, domain: &str, _population: u64) -> bool {
        if let Some(verdict) = self.cache.get(domain) {
            tracing::debug!(domain = %domain, verdict, "verdict served from cache");
            return verdict;
        }

        let verdict = self.resolve(domain).await;
        self.cache.insert(domain, verdict);
        verdict
    }

    fn name(&self) -> &'static str {
        "prober"
    }
}
