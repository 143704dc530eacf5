//! Search orchestration: parse -> catalog -> generate -> filter -> check ->
//! screen -> sort.
//!
//! Availability checks run in fixed-size concurrent batches with an
//! artificial pacing delay between batches. A superseding search cancels
//! the previous one through its token; the cancelled run stops between
//! batches and returns whatever it had decorated so far.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::future::join_all;

use crate::catalog;
use crate::check::AvailabilityStrategy;
use crate::error::{GeoDomainError, Result};
use crate::generate::{parse_keywords, CombineConfig, Combiner, LengthFilter};
use crate::screen::TrademarkScreener;
use crate::types::{CheckConfig, SearchOutcome, SearchRequest, SearchSummary};

/// Cooperative cancellation flag shared between a search and its
/// supersessor. Checked between batches; in-flight batch work completes.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Progress snapshot emitted after each completed batch
#[derive(Debug, Clone, Copy)]
pub struct SearchProgress {
    pub checked: usize,
    pub total: usize,
    pub available_count: usize,
}

/// Runs search requests against a configured availability strategy
pub struct SearchEngine {
    strategy: Arc<dyn AvailabilityStrategy>,
    screener: TrademarkScreener,
    config: CheckConfig,
}

impl SearchEngine {
    pub fn new(strategy: Arc<dyn AvailabilityStrategy>, config: CheckConfig) -> Self {
        Self {
            strategy,
            screener: TrademarkScreener::new(),
            config,
        }
    }

    /// Run a search to completion (or cancellation)
    pub async fn search(&self, request: &SearchRequest, cancel: &CancelToken) -> Result<SearchOutcome> {
        self.search_with_progress(request, cancel, |_| {}).await
    }

    /// Run a search, emitting a progress snapshot after each batch
    pub async fn search_with_progress<F>(
        &self,
        request: &SearchRequest,
        cancel: &CancelToken,
        on_progress: F,
    ) -> Result<SearchOutcome>
    where
        F: Fn(&SearchProgress) + Send + Sync,
    {
        let keywords = parse_keywords(&request.keywords, request.keyword_mode);
        if keywords.is_empty() {
            return Err(GeoDomainError::validation("No keywords provided"));
        }
        if request.country.trim().is_empty() {
            return Err(GeoDomainError::validation("No country selected"));
        }

        // Unknown country or state is a resilience case, not an error: it
        // produces an empty city list and therefore an empty result set.
        let cities = match &request.state {
            Some(state) => catalog::cities_in_state(&request.country, state),
            None => catalog::cities_for(&request.country).to_vec(),
        };

        let combiner = Combiner::new(CombineConfig {
            city_position: request.keyword_position.city_position(),
            swap_words: request.swap_words,
            swap_rule: request.swap_rule,
            extension: request.extension.clone(),
        });

        let generated = combiner.combine(&keywords, &cities);
        tracing::debug!(
            keywords = keywords.len(),
            cities = cities.len(),
            generated = generated.len(),
            "generated domain combinations"
        );

        let filter = LengthFilter::new(request.min_length, request.max_length);
        let mut candidates = filter.apply(generated);

        for candidate in candidates.iter_mut() {
            candidate.trademark = self.screener.conflicts(&candidate.keyword);
        }

        let summary = SearchSummary {
            keyword_count: keywords.len(),
            city_count: cities.len(),
            domain_count: candidates.len(),
        };

        let total = candidates.len();
        let mut checked = 0usize;
        let mut available_count = 0usize;
        let mut cancelled = false;

        let batch_size = self.config.batch_size.max(1);
        for chunk in candidates.chunks_mut(batch_size) {
            if cancel.is_cancelled() {
                tracing::info!(checked, total, "search cancelled, abandoning remaining batches");
                cancelled = true;
                break;
            }

            // Fan out the whole batch; one slow or failing candidate never
            // affects its siblings because strategies always settle to a
            // verdict.
            let verdicts = join_all(
                chunk
                    .iter()
                    .map(|c| self.strategy.estimate(&c.domain, c.population)),
            )
            .await;

            for (candidate, verdict) in chunk.iter_mut().zip(verdicts) {
                candidate.available = verdict;
                if verdict {
                    available_count += 1;
                }
            }

            checked += chunk.len();
            on_progress(&SearchProgress {
                checked,
                total,
                available_count,
            });

            // Pacing between batches, not correctness
            if checked < total && !self.config.batch_delay.is_zero() {
                tokio::time::sleep(self.config.batch_delay).await;
            }
        }

        // Population descending; ties keep generation order (stable sort)
        candidates.sort_by(|a, b| b.population.cmp(&a.population));

        Ok(SearchOutcome {
            candidates,
            summary,
            cancelled,
            completed_at: chrono::Utc::now(),
        })
    }
}
