//! TTL verdict cache with an injectable clock

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Time source abstraction so cache expiry is testable without sleeping
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for tests
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    offset: RwLock<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: RwLock::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.offset.write() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.read()
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    available: bool,
    observed_at: Instant,
}

/// Unbounded per-domain verdict cache.
///
/// Staleness is evaluated on read against the fixed TTL; there is no other
/// eviction. Concurrent writers to the same key are last-write-wins, which
/// is acceptable because verdicts for the same domain within a TTL window
/// are interchangeable.
pub struct VerdictCache {
    entries: RwLock<HashMap<String, Entry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl VerdictCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Fresh verdict for a domain, or `None` on miss/stale entry
    pub fn get(&self, domain: &str) -> Option<bool> {
        let entries = self.entries.read();
        let entry = entries.get(domain)?;
        if self.clock.now().duration_since(entry.observed_at) < self.ttl {
            Some(entry.available)
        } else {
            None
        }
    }

    pub fn insert(&self, domain: &str, available: bool) {
        let mut entries = self.entries.write();
        entries.insert(
            domain.to_string(),
            Entry {
                available,
                observed_at: self.clock.now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_within_ttl() {
        let cache = VerdictCache::new(Duration::from_secs(300));
        cache.insert("lawyeraustin.com", true);
        assert_eq!(cache.get("lawyeraustin.com"), Some(true));
        assert_eq!(cache.get("other.com"), None);
    }

    #[test]
    fn test_stale_after_ttl() {
        let clock = Arc::new(ManualClock::new());
        let cache = VerdictCache::with_clock(Duration::from_secs(300), clock.clone());

        cache.insert("lawyeraustin.com", false);
        clock.advance(Duration::from_secs(299));
        assert_eq!(cache.get("lawyeraustin.com"), Some(false));

        clock.advance(Duration::from_secs(2));
        assert_eq!(cache.get("lawyeraustin.com"), None);
    }

    #[test]
    fn test_reinsert_refreshes() {
        let clock = Arc::new(ManualClock::new());
        let cache = VerdictCache::with_clock(Duration::from_secs(300), clock.clone());

        cache.insert("d.com", true);
        clock.advance(Duration::from_secs(200));
        cache.insert("d.com", false);
        clock.advance(Duration::from_secs(200));

        // 400s since first write, 200s since second: still fresh
        assert_eq!(cache.get("d.com"), Some(false));
    }

    #[test]
    fn test_clear() {
        let cache = VerdictCache::new(Duration::from_secs(300));
        cache.insert("d.com", true);
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
