//! Core types and structures for geo-domains

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How raw keyword input is interpreted.
///
/// The source tool had divergent form variants: some split free text on
/// commas/newlines, others treated the whole input as one literal keyword.
/// Both behaviors are kept as explicit modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMode {
    /// Split on commas and newlines, trim, drop empties
    Split,
    /// Whole input is a single keyword
    Literal,
}

impl Default for KeywordMode {
    fn default() -> Self {
        Self::Split
    }
}

impl std::fmt::Display for KeywordMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeywordMode::Split => write!(f, "split"),
            KeywordMode::Literal => write!(f, "literal"),
        }
    }
}

/// Where the keyword sits in the composed domain (request surface)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordPosition {
    Beginning,
    End,
}

impl KeywordPosition {
    /// Convert to the generator-level city position: keyword at the
    /// beginning means the city sits at the end, and vice versa.
    pub fn city_position(self) -> CityPosition {
        match self {
            KeywordPosition::Beginning => CityPosition::End,
            KeywordPosition::End => CityPosition::Start,
        }
    }
}

impl std::fmt::Display for KeywordPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeywordPosition::Beginning => write!(f, "beginning"),
            KeywordPosition::End => write!(f, "end"),
        }
    }
}

/// Where the city sits in the composed domain (generator surface)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityPosition {
    /// City leads: CityKeyword.tld
    Start,
    /// City trails: KeywordCity.tld
    End,
}

impl std::fmt::Display for CityPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CityPosition::Start => write!(f, "start"),
            CityPosition::End => write!(f, "end"),
        }
    }
}

/// How the swap-words toggle interacts with the position choice.
///
/// The source variants disagreed here, so both semantics are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwapRule {
    /// Swap inverts the effective order (XOR with position)
    Invert,
    /// Swap only applies when the city sits at the end; ignored otherwise
    EndOnly,
}

impl Default for SwapRule {
    fn default() -> Self {
        Self::Invert
    }
}

impl std::fmt::Display for SwapRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapRule::Invert => write!(f, "invert"),
            SwapRule::EndOnly => write!(f, "end-only"),
        }
    }
}

/// Availability estimation strategy (one per deployment profile)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Offline population-tiered simulation
    Heuristic,
    /// Single best-effort HTTPS HEAD probe
    Probe,
    /// Cached WHOIS -> DNS -> HTTP method chain
    Prober,
}

impl Default for Strategy {
    fn default() -> Self {
        Self::Heuristic
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Heuristic => write!(f, "heuristic"),
            Strategy::Probe => write!(f, "probe"),
            Strategy::Prober => write!(f, "prober"),
        }
    }
}

/// A generated domain candidate with its provenance and verdicts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainCandidate {
    pub domain: String,
    pub keyword: String,
    pub city: String,
    pub state: String,
    pub population: u64,
    pub available: bool,
    pub trademark: bool,
}

/// Search request as accepted from the outside
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Raw keyword input, interpreted per `keyword_mode`. Accepts either a
    /// single string or a list of strings (joined on newlines).
    #[serde(deserialize_with = "deserialize_keywords")]
    pub keywords: String,
    #[serde(default)]
    pub keyword_mode: KeywordMode,
    /// Country code, e.g. "US" or "CA"
    pub country: String,
    /// Optional exact state/province name filter
    #[serde(default)]
    pub state: Option<String>,
    pub keyword_position: KeywordPosition,
    /// Extension with leading dot, e.g. ".com"
    pub extension: String,
    #[serde(default)]
    pub swap_words: bool,
    #[serde(default)]
    pub swap_rule: SwapRule,
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
}

fn deserialize_keywords<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawKeywords {
        One(String),
        Many(Vec<String>),
    }

    Ok(match RawKeywords::deserialize(deserializer)? {
        RawKeywords::One(text) => text,
        RawKeywords::Many(list) => list.join("\n"),
    })
}

/// Summary counts for a search
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchSummary {
    pub keyword_count: usize,
    pub city_count: usize,
    pub domain_count: usize,
}

/// Full search outcome: decorated candidates plus counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub candidates: Vec<DomainCandidate>,
    pub summary: SearchSummary,
    /// True if a superseding search cancelled this one mid-flight;
    /// candidates hold whatever was decorated before the stop.
    pub cancelled: bool,
    pub completed_at: DateTime<Utc>,
}

/// Configuration for availability checking
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Candidates per concurrent batch
    pub batch_size: usize,
    /// Artificial pacing delay between batches
    pub batch_delay: Duration,
    /// Per-request network timeout
    pub timeout: Duration,
    /// Verdict cache time-to-live (cached prober)
    pub cache_ttl: Duration,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            batch_size: 20,
            batch_delay: Duration::from_millis(150),
            timeout: Duration::from_secs(5),
            cache_ttl: Duration::from_secs(5 * 60),
        }
    }
}

/// Population tier thresholds for the heuristic estimator.
///
/// Tiers are checked top-down; the first threshold the population exceeds
/// determines the availability probability.
#[derive(Debug, Clone)]
pub struct HeuristicTiers {
    pub tiers: Vec<(u64, f64)>,
    /// Probability when no tier matches
    pub base_probability: f64,
}

impl Default for HeuristicTiers {
    fn default() -> Self {
        Self {
            tiers: vec![(1_000_000, 0.2), (500_000, 0.4), (100_000, 0.6)],
            base_probability: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_position_maps_to_city_position() {
        assert_eq!(KeywordPosition::Beginning.city_position(), CityPosition::End);
        assert_eq!(KeywordPosition::End.city_position(), CityPosition::Start);
    }

    #[test]
    fn test_display_round_trips() {
        assert_eq!(Strategy::Heuristic.to_string(), "heuristic");
        assert_eq!(SwapRule::EndOnly.to_string(), "end-only");
        assert_eq!(CityPosition::Start.to_string(), "start");
        assert_eq!(KeywordMode::Literal.to_string(), "literal");
    }

    #[test]
    fn test_search_request_deserializes_with_defaults() {
        let req: SearchRequest = serde_json::from_str(
            r#"{
                "keywords": "lawyer, attorney",
                "country": "US",
                "keyword_position": "end",
                "extension": ".com"
            }"#,
        )
        .unwrap();
        assert_eq!(req.keyword_mode, KeywordMode::Split);
        assert_eq!(req.swap_rule, SwapRule::Invert);
        assert!(!req.swap_words);
        assert!(req.state.is_none());
    }

    #[test]
    fn test_search_request_accepts_keyword_list() {
        let req: SearchRequest = serde_json::from_str(
            r#"{
                "keywords": ["lawyer", "attorney"],
                "country": "US",
                "keyword_position": "beginning",
                "extension": ".com"
            }"#,
        )
        .unwrap();
        assert_eq!(req.keywords, "lawyer\nattorney");
    }

    #[test]
    fn test_check_config_defaults() {
        let config = CheckConfig::default();
        assert_eq!(config.batch_size, 20);
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
    }
}
