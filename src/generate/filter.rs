//! Domain length filtering

use crate::types::DomainCandidate;

/// Inclusive character-length bounds on the full domain string (extension
/// included). Absent bounds mean unrestricted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthFilter {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl LengthFilter {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn accepts(&self, domain: &str) -> bool {
        let len = domain.len();
        self.min.map_or(true, |min| len >= min) && self.max.map_or(true, |max| len <= max)
    }

    pub fn apply(&self, candidates: Vec<DomainCandidate>) -> Vec<DomainCandidate> {
        if self.is_unrestricted() {
            return candidates;
        }
        candidates
            .into_iter()
            .filter(|c| self.accepts(&c.domain))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        let filter = LengthFilter::new(Some(5), Some(20));
        assert!(filter.accepts("nyclaw.com")); // 10 chars
        assert!(!filter.accepts("a.co")); // 4 chars
        assert!(filter.accepts("ab.co")); // exactly 5
        assert!(filter.accepts("abcdefghijklmnop.com")); // exactly 20
        assert!(!filter.accepts("abcdefghijklmnopq.com")); // 21
    }

    #[test]
    fn test_absent_bounds_are_unrestricted() {
        let filter = LengthFilter::default();
        assert!(filter.is_unrestricted());
        assert!(filter.accepts("a.co"));
        assert!(filter.accepts(&"x".repeat(300)));

        let min_only = LengthFilter::new(Some(5), None);
        assert!(!min_only.accepts("a.co"));
        assert!(min_only.accepts(&"x".repeat(300)));
    }

    #[test]
    fn test_apply_retains_matching_candidates() {
        let filter = LengthFilter::new(Some(5), Some(20));
        let make = |domain: &str| DomainCandidate {
            domain: domain.to_string(),
            keyword: "k".to_string(),
            city: "c".to_string(),
            state: "s".to_string(),
            population: 0,
            available: false,
            trademark: false,
        };
        let kept = filter.apply(vec![make("nyclaw.com"), make("a.co")]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].domain, "nyclaw.com");
    }
}
