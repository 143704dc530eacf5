//! Geo Domains - geo-targeted domain name generation and availability estimation
//!
//! A simple CLI tool and library for combining keywords with city names into
//! candidate domains, estimating their availability, and exporting the results.

pub mod catalog;
pub mod check;
pub mod error;
pub mod generate;
pub mod present;
pub mod screen;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use error::{GeoDomainError, Result};
pub use types::{
    CheckConfig, CityPosition, DomainCandidate, HeuristicTiers, KeywordMode, KeywordPosition,
    SearchOutcome, SearchRequest, SearchSummary, Strategy, SwapRule,
};

// Re-export main functionality
pub use check::{build_strategy, AvailabilityStrategy};
pub use screen::TrademarkScreener;
pub use search::{CancelToken, SearchEngine, SearchProgress};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
