//! Offline availability simulation.
//!
//! This strategy never touches the network: it models how likely a
//! city+keyword domain is to be free, using a fixed taken-list for the most
//! contested combinations and population-tiered odds for the rest. Verdicts
//! are estimates, not registry facts.

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::check::AvailabilityStrategy;
use crate::types::HeuristicTiers;

/// Cities whose common-keyword domains are effectively always registered
const MAJOR_CITIES: &[&str] = &[
    "newyork",
    "losangeles",
    "chicago",
    "houston",
    "phoenix",
    "philadelphia",
    "sanantonio",
    "sandiego",
    "dallas",
    "austin",
    "toronto",
    "vancouver",
    "montreal",
    "calgary",
];

/// Business keywords that are almost certainly taken in major cities
const COMMON_KEYWORDS: &[&str] = &[
    "lawyer",
    "attorney",
    "doctor",
    "dentist",
    "restaurant",
    "hotel",
    "realtor",
    "realestate",
    "insurance",
    "auto",
    "car",
    "pizza",
    "plumber",
    "electrician",
    "contractor",
    "business",
];

/// Population-tiered simulated availability
pub struct HeuristicEstimator {
    tiers: HeuristicTiers,
    rng: Mutex<StdRng>,
}

impl HeuristicEstimator {
    pub fn new() -> Self {
        Self {
            tiers: HeuristicTiers::default(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seeded variant for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            tiers: HeuristicTiers::default(),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn with_tiers(mut self, tiers: HeuristicTiers) -> Self {
        self.tiers = tiers;
        self
    }

    /// True when the domain contains a major-city + common-keyword
    /// concatenation in either order
    fn is_contested_combination(domain: &str) -> bool {
        let domain = domain.to_lowercase();
        for city in MAJOR_CITIES {
            for keyword in COMMON_KEYWORDS {
                if domain.contains(&format!("{}{}", city, keyword))
                    || domain.contains(&format!("{}{}", keyword, city))
                {
                    return true;
                }
            }
        }
        false
    }

    fn probability_for(&self, population: u64) -> f64 {
        for &(threshold, probability) in &self.tiers.tiers {
            if population > threshold {
                return probability;
            }
        }
        self.tiers.base_probability
    }
}

impl Default for HeuristicEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AvailabilityStrategy for HeuristicEstimator {
    async fn estimate(&self, domain: &str, population: u64) -> bool {
        if Self::is_contested_combination(domain) {
            return false;
        }

        let probability = self.probability_for(population);
        let roll: f64 = self.rng.lock().gen();
        roll < probability
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_contested_combinations_are_never_available() {
        let estimator = HeuristicEstimator::with_seed(1);
        // Both orders, regardless of population tier
        assert!(!estimator.estimate("newyorklawyer.com", 100).await);
        assert!(!estimator.estimate("lawyernewyork.com", 100).await);
        assert!(!estimator.estimate("torontopizza.com", 100).await);
        assert!(!estimator.estimate("NewYorkLawyer.com", 100).await);
    }

    #[tokio::test]
    async fn test_seed_makes_runs_reproducible() {
        let a = HeuristicEstimator::with_seed(42);
        let b = HeuristicEstimator::with_seed(42);

        for _ in 0..32 {
            assert_eq!(
                a.estimate("quietword.com", 250_000).await,
                b.estimate("quietword.com", 250_000).await
            );
        }
    }

    #[test]
    fn test_tier_selection() {
        let estimator = HeuristicEstimator::with_seed(0);
        assert_eq!(estimator.probability_for(2_000_000), 0.2);
        assert_eq!(estimator.probability_for(600_000), 0.4);
        assert_eq!(estimator.probability_for(150_000), 0.6);
        assert_eq!(estimator.probability_for(40_000), 0.8);
        // Thresholds are strict greater-than
        assert_eq!(estimator.probability_for(1_000_000), 0.4);
    }

    #[tokio::test]
    async fn test_degenerate_tiers_pin_the_verdict() {
        let always = HeuristicEstimator::with_seed(7).with_tiers(HeuristicTiers {
            tiers: vec![],
            base_probability: 1.0,
        });
        assert!(always.estimate("someword.com", 5_000_000).await);

        let never = HeuristicEstimator::with_seed(7).with_tiers(HeuristicTiers {
            tiers: vec![],
            base_probability: 0.0,
        });
        assert!(!never.estimate("someword.com", 10).await);
    }
}
