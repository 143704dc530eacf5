//! Availability estimation strategies.
//!
//! Three interchangeable strategies sit behind one trait: an offline
//! heuristic simulation, a single HTTP probe, and a cached multi-method
//! prober. Estimation is infallible at this boundary; every internal
//! failure resolves to a verdict under the strategy's own policy.

pub mod cache;
pub mod heuristic;
pub mod probe;
pub mod prober;

pub use cache::{Clock, ManualClock, SystemClock, VerdictCache};
pub use heuristic::HeuristicEstimator;
pub use probe::HttpProbe;
pub use prober::CachedProber;

use async_trait::async_trait;
use std::sync::Arc;

use crate::types::{CheckConfig, Strategy};

/// Trait for availability estimation strategies
#[async_trait]
pub trait AvailabilityStrategy: Send + Sync {
    /// Estimate whether a domain is available for registration.
    ///
    /// `population` feeds the heuristic tiers; network strategies ignore it.
    async fn estimate(&self, domain: &str, population: u64) -> bool;

    /// Get the strategy name
    fn name(&self) -> &'static str;
}

/// Build a strategy instance for a deployment profile.
///
/// `seed` pins the heuristic RNG for reproducible runs and is ignored by
/// the network strategies.
pub fn build_strategy(
    strategy: Strategy,
    config: &CheckConfig,
    seed: Option<u64>,
) -> Arc<dyn AvailabilityStrategy> {
    match strategy {
        Strategy::Heuristic => match seed {
            Some(seed) => Arc::new(HeuristicEstimator::with_seed(seed)),
            None => Arc::new(HeuristicEstimator::new()),
        },
        Strategy::Probe => Arc::new(HttpProbe::new(config.timeout)),
        Strategy::Prober => Arc::new(CachedProber::new(config)),
    }
}
