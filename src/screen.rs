//! Trademark screening.
//!
//! A deliberately naive containment check against a short static brand
//! list. A real screening pipeline would query USPTO/WIPO; this flags the
//! obvious collisions only and guarantees nothing about the rest.

/// Brand names screened against keywords
const BRAND_NAMES: &[&str] = &[
    "google",
    "facebook",
    "microsoft",
    "apple",
    "amazon",
    "netflix",
    "uber",
    "airbnb",
    "spotify",
    "twitter",
    "instagram",
    "linkedin",
    "youtube",
    "walmart",
    "target",
    "starbucks",
    "mcdonalds",
    "nike",
    "adidas",
    "coca-cola",
    "pepsi",
    "ford",
    "toyota",
    "bmw",
];

/// Flags keywords that collide with a listed brand name.
///
/// A keyword conflicts when it contains a brand, a brand contains it, or it
/// contains the brand's stem (the brand minus its final letter, catching
/// simple respellings like "googly").
#[derive(Debug, Clone, Copy, Default)]
pub struct TrademarkScreener;

impl TrademarkScreener {
    pub fn new() -> Self {
        Self
    }

    /// Case-insensitive conflict check
    pub fn conflicts(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        if keyword.is_empty() {
            return false;
        }

        BRAND_NAMES.iter().any(|&brand| {
            if keyword.contains(brand) || brand.contains(keyword.as_str()) {
                return true;
            }
            // Stems shorter than 5 chars match far too much plain text
            let stem = &brand[..brand.len() - 1];
            stem.len() >= 5 && keyword.contains(stem)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_containing_brand_is_flagged() {
        let screener = TrademarkScreener::new();
        assert!(screener.conflicts("googleads"));
        assert!(screener.conflicts("myuberride"));
    }

    #[test]
    fn test_brand_containing_keyword_is_flagged() {
        let screener = TrademarkScreener::new();
        assert!(screener.conflicts("goog"));
        assert!(screener.conflicts("spotif"));
    }

    #[test]
    fn test_respelling_is_flagged() {
        let screener = TrademarkScreener::new();
        // Shares everything but the brand's final letter
        assert!(screener.conflicts("googly"));
    }

    #[test]
    fn test_clean_keywords_pass() {
        let screener = TrademarkScreener::new();
        assert!(!screener.conflicts("lawyer"));
        assert!(!screener.conflicts("dentist"));
        assert!(!screener.conflicts(""));
    }

    #[test]
    fn test_case_insensitive() {
        let screener = TrademarkScreener::new();
        assert!(screener.conflicts("Google"));
        assert!(screener.conflicts("SPOTIFY"));
    }
}
