//! Keyword x city combination generator

use crate::catalog::City;
use crate::generate::normalize;
use crate::types::{CityPosition, DomainCandidate, SwapRule};

/// Configuration for the combination generator
#[derive(Debug, Clone)]
pub struct CombineConfig {
    pub city_position: CityPosition,
    pub swap_words: bool,
    pub swap_rule: SwapRule,
    /// Extension with or without leading dot ("com" and ".com" both work)
    pub extension: String,
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            city_position: CityPosition::End,
            swap_words: false,
            swap_rule: SwapRule::default(),
            extension: ".com".to_string(),
        }
    }
}

/// Produces one candidate per (keyword, city) pair.
///
/// Pairs where either side normalizes to an empty string are dropped, never
/// emitted with empty components. Identical domain strings from different
/// pairs are kept as distinct rows since each carries its own provenance.
#[derive(Debug, Clone)]
pub struct Combiner {
    config: CombineConfig,
}

impl Combiner {
    pub fn new(config: CombineConfig) -> Self {
        Self { config }
    }

    /// Whether the city leads the composed name once the swap toggle is
    /// applied under the configured rule.
    fn city_first(&self) -> bool {
        let base = self.config.city_position == CityPosition::Start;
        match self.config.swap_rule {
            SwapRule::Invert => base ^ self.config.swap_words,
            SwapRule::EndOnly => {
                if self.config.city_position == CityPosition::End {
                    base ^ self.config.swap_words
                } else {
                    base
                }
            }
        }
    }

    /// Compose the lowercased domain string for one pair, or `None` when a
    /// side normalizes away entirely.
    pub fn compose(&self, keyword: &str, city: &str) -> Option<String> {
        let k = normalize(keyword);
        let c = normalize(city);
        if k.is_empty() || c.is_empty() {
            return None;
        }

        let ext = self.config.extension.trim_start_matches('.');
        let name = if self.city_first() {
            format!("{}{}", c, k)
        } else {
            format!("{}{}", k, c)
        };
        Some(format!("{}.{}", name, ext).to_lowercase())
    }

    /// Cartesian product of keywords x cities, in source order.
    pub fn combine(&self, keywords: &[String], cities: &[City]) -> Vec<DomainCandidate> {
        let mut candidates = Vec::with_capacity(keywords.len() * cities.len());

        for keyword in keywords {
            for city in cities {
                if let Some(domain) = self.compose(keyword, city.name) {
                    candidates.push(DomainCandidate {
                        domain,
                        keyword: keyword.clone(),
                        city: city.name.to_string(),
                        state: city.state.to_string(),
                        population: city.population,
                        available: false,
                        trademark: false,
                    });
                }
            }
        }

        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combiner(position: CityPosition, swap: bool, rule: SwapRule) -> Combiner {
        Combiner::new(CombineConfig {
            city_position: position,
            swap_words: swap,
            swap_rule: rule,
            extension: ".com".to_string(),
        })
    }

    fn city(name: &'static str, state: &'static str, population: u64) -> City {
        City { name, state, population }
    }

    #[test]
    fn test_keyword_then_city_when_city_at_end() {
        let c = combiner(CityPosition::End, false, SwapRule::Invert);
        assert_eq!(c.compose("lawyer", "Austin").unwrap(), "lawyeraustin.com");
    }

    #[test]
    fn test_city_then_keyword_when_city_at_start() {
        let c = combiner(CityPosition::Start, false, SwapRule::Invert);
        assert_eq!(c.compose("lawyer", "Austin").unwrap(), "austinlawyer.com");
    }

    #[test]
    fn test_swap_inverts_position() {
        // (Start, swap) must equal (End, no swap) under the invert rule
        let swapped = combiner(CityPosition::Start, true, SwapRule::Invert);
        let plain = combiner(CityPosition::End, false, SwapRule::Invert);
        assert_eq!(
            swapped.compose("lawyer", "Austin"),
            plain.compose("lawyer", "Austin")
        );
        assert_eq!(swapped.compose("lawyer", "Austin").unwrap(), "lawyeraustin.com");
    }

    #[test]
    fn test_end_only_rule_ignores_swap_at_start() {
        let c = combiner(CityPosition::Start, true, SwapRule::EndOnly);
        // Swap has no effect: city keeps leading
        assert_eq!(c.compose("lawyer", "Austin").unwrap(), "austinlawyer.com");

        let c = combiner(CityPosition::End, true, SwapRule::EndOnly);
        assert_eq!(c.compose("lawyer", "Austin").unwrap(), "austinlawyer.com");
    }

    #[test]
    fn test_extension_dot_is_optional() {
        let with_dot = combiner(CityPosition::End, false, SwapRule::Invert);
        let mut config = CombineConfig::default();
        config.extension = "com".to_string();
        let without_dot = Combiner::new(config);
        assert_eq!(
            with_dot.compose("pizza", "Reno"),
            without_dot.compose("pizza", "Reno")
        );
    }

    #[test]
    fn test_lowercases_and_normalizes() {
        let c = combiner(CityPosition::End, false, SwapRule::Invert);
        assert_eq!(
            c.compose("Law Firm", "St. Petersburg").unwrap(),
            "lawfirmstpetersburg.com"
        );
    }

    #[test]
    fn test_empty_normalized_pair_is_dropped() {
        let c = combiner(CityPosition::End, false, SwapRule::Invert);
        assert_eq!(c.compose("!!!", "Austin"), None);
        assert_eq!(c.compose("lawyer", "---"), None);
    }

    #[test]
    fn test_combine_counts_and_order() {
        let c = combiner(CityPosition::End, false, SwapRule::Invert);
        let keywords = vec!["lawyer".to_string(), "!!!".to_string(), "pizza".to_string()];
        let cities = [
            city("Austin", "Texas", 978_908),
            city("Dallas", "Texas", 1_343_573),
        ];

        let candidates = c.combine(&keywords, &cities);
        // 3 keywords x 2 cities minus the 2 pairs with an empty keyword
        assert_eq!(candidates.len(), 4);
        assert_eq!(candidates[0].domain, "lawyeraustin.com");
        assert_eq!(candidates[1].domain, "lawyerdallas.com");
        assert_eq!(candidates[2].domain, "pizzaaustin.com");
        assert_eq!(candidates[3].domain, "pizzadallas.com");
        assert_eq!(candidates[0].keyword, "lawyer");
        assert_eq!(candidates[0].state, "Texas");
        assert_eq!(candidates[1].population, 1_343_573);
    }

    #[test]
    fn test_duplicate_domains_keep_provenance_rows() {
        let c = combiner(CityPosition::End, false, SwapRule::Invert);
        let keywords = vec!["law-firm".to_string(), "lawfirm".to_string()];
        let cities = [city("Reno", "Nevada", 255_601)];

        let candidates = c.combine(&keywords, &cities);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].domain, candidates[1].domain);
        assert_ne!(candidates[0].keyword, candidates[1].keyword);
    }
}
