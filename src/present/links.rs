//! External research tool links.
//!
//! Opaque pass-through builders: each tool is a fixed URL template with the
//! domain, or the city + keyword phrase, substituted in. Nothing is fetched
//! or parsed here.

use crate::types::DomainCandidate;

/// External lookup tools offered per result row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalTool {
    /// Domain value appraisal
    Appraisal,
    /// Keyword search volume
    Volume,
    /// Map search for the local market
    Maps,
    /// Business review search
    Yelp,
    /// Registered-variant search
    DotDb,
    /// Spam/blocklist reputation
    Spam,
    /// Plain web search for the local market
    Search,
    /// Historical snapshots
    Archive,
}

impl ExternalTool {
    pub const ALL: [ExternalTool; 8] = [
        ExternalTool::Appraisal,
        ExternalTool::Volume,
        ExternalTool::Maps,
        ExternalTool::Yelp,
        ExternalTool::DotDb,
        ExternalTool::Spam,
        ExternalTool::Search,
        ExternalTool::Archive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExternalTool::Appraisal => "appraisal",
            ExternalTool::Volume => "volume",
            ExternalTool::Maps => "maps",
            ExternalTool::Yelp => "yelp",
            ExternalTool::DotDb => "dotdb",
            ExternalTool::Spam => "spam",
            ExternalTool::Search => "search",
            ExternalTool::Archive => "archive",
        }
    }

    /// Build the lookup URL for one candidate
    pub fn url(&self, candidate: &DomainCandidate) -> String {
        let domain = &candidate.domain;
        let market = format!("{} {}", candidate.city, candidate.keyword);

        match self {
            ExternalTool::Appraisal => {
                format!("https://www.dynadot.com/domain/appraisal.html?domain={}", domain)
            }
            ExternalTool::Volume => format!(
                "https://app.neilpatel.com/en/ubersuggest/overview?keyword={}&lang=en&locId=2840",
                encode_query(domain)
            ),
            ExternalTool::Maps => format!(
                "https://www.google.com/maps/search/{}",
                encode_path(&market)
            ),
            ExternalTool::Yelp => format!(
                "https://www.yelp.com/search?find_desc={}",
                encode_query(domain)
            ),
            ExternalTool::DotDb => {
                format!("https://dotdb.com/search?keyword={}&position=any", domain)
            }
            ExternalTool::Spam => {
                format!("https://check.spamhaus.org/results/?query={}", domain)
            }
            ExternalTool::Search => format!(
                "https://www.google.com/search?q={}",
                encode_query(&market)
            ),
            ExternalTool::Archive => format!("https://web.archive.org/web/*/{}", domain),
        }
    }
}

/// Percent-encode a query-string value
fn encode_query(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Percent-encode a path segment (space as %20, not +)
fn encode_path(value: &str) -> String {
    encode_query(value).replace('+', "%20")
}
