// Time-Bounded Page Cache
//
// Memoizes source fetches per page number. An entry expires TTL
// milliseconds after the fetch that created it; every page keeps its own
// clock, so refreshing page 2 never extends page 1.

use crate::domain::{DomainError, JobRecord};
use crate::error::Result;
use crate::port::{Clock, JobSource};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Default entry lifetime: one hour.
pub const DEFAULT_TTL_MS: i64 = 3_600_000;

#[derive(Clone)]
struct CacheEntry {
    records: Arc<Vec<JobRecord>>,
    fetched_at: i64,
}

/// Outcome of a cache lookup.
#[derive(Debug)]
pub struct PageFetch {
    pub records: Arc<Vec<JobRecord>>,
    /// True when served from a live entry without touching the source.
    pub from_cache: bool,
}

/// Read-through cache in front of a [`JobSource`].
///
/// Shared process-wide behind an `Arc`; job pages are not session-specific.
/// Replacement installs a whole new entry under the lock, never mutates one
/// in place.
pub struct PageCache {
    source: Arc<dyn JobSource>,
    clock: Arc<dyn Clock>,
    ttl_ms: i64,
    entries: RwLock<HashMap<u32, CacheEntry>>,
}

impl PageCache {
    pub fn new(source: Arc<dyn JobSource>, clock: Arc<dyn Clock>) -> Self {
        Self::with_ttl(source, clock, DEFAULT_TTL_MS)
    }

    pub fn with_ttl(source: Arc<dyn JobSource>, clock: Arc<dyn Clock>, ttl_ms: i64) -> Self {
        Self {
            source,
            clock,
            ttl_ms,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Records for `page`: from the cache while the entry is live, fetched
    /// and stored otherwise. A failed fetch propagates and leaves the cache
    /// untouched.
    pub async fn get(&self, page: u32) -> Result<PageFetch> {
        if page == 0 {
            return Err(DomainError::InvalidPage(page).into());
        }

        let now = self.clock.now_millis();
        if let Some(entry) = self.live_entry(page, now) {
            debug!(page, "cache hit");
            return Ok(PageFetch {
                records: entry.records,
                from_cache: true,
            });
        }

        debug!(page, "cache miss, fetching");
        let records = Arc::new(self.source.fetch_page(page).await?);

        let entry = CacheEntry {
            records: Arc::clone(&records),
            fetched_at: now,
        };
        self.entries.write().unwrap().insert(page, entry);

        info!(page, count = records.len(), "page fetched");
        Ok(PageFetch {
            records,
            from_cache: false,
        })
    }

    /// Drop every entry regardless of age. The next `get` for any page goes
    /// to the source.
    pub fn invalidate_all(&self) {
        let mut entries = self.entries.write().unwrap();
        let dropped = entries.len();
        entries.clear();
        info!(dropped, "cache invalidated");
    }

    fn live_entry(&self, page: u32, now: i64) -> Option<CacheEntry> {
        let entries = self.entries.read().unwrap();
        entries
            .get(&page)
            .filter(|entry| now - entry.fetched_at < self.ttl_ms)
            .cloned()
    }
}
