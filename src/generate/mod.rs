//! Candidate generation: normalization, keyword parsing, combination,
//! length filtering.

mod combiner;
mod filter;
mod normalize;

pub use combiner::{CombineConfig, Combiner};
pub use filter::LengthFilter;
pub use normalize::{normalize, parse_keywords};
