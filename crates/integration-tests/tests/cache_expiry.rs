// Cache Expiry Integration Tests
// TTL behavior of the shared page cache, driven by a manual clock and a
// fetch-counting source.

use async_trait::async_trait;
use joblens_core::application::cache::{PageCache, DEFAULT_TTL_MS};
use joblens_core::domain::JobRecord;
use joblens_core::port::{Clock, FetchError, JobSource};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// Counts fetches per page number.
struct CountingSource {
    calls: Mutex<HashMap<u32, usize>>,
}

impl CountingSource {
    fn new() -> Self {
        Self {
            calls: Mutex::new(HashMap::new()),
        }
    }

    fn calls_for(&self, page: u32) -> usize {
        *self.calls.lock().unwrap().get(&page).unwrap_or(&0)
    }
}

#[async_trait]
impl JobSource for CountingSource {
    async fn fetch_page(&self, page: u32) -> Result<Vec<JobRecord>, FetchError> {
        *self.calls.lock().unwrap().entry(page).or_default() += 1;
        Ok(vec![JobRecord::new_test(format!("Job p{}", page), "Acme")])
    }
}

struct TestClock(AtomicI64);

impl TestClock {
    fn advance(&self, delta_ms: i64) {
        self.0.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for TestClock {
    fn now_millis(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

fn cache_over_counting() -> (Arc<PageCache>, Arc<CountingSource>, Arc<TestClock>) {
    let source = Arc::new(CountingSource::new());
    let clock = Arc::new(TestClock(AtomicI64::new(0)));
    let cache = Arc::new(PageCache::new(source.clone(), clock.clone()));
    (cache, source, clock)
}

#[tokio::test]
async fn one_fetch_per_page_within_the_ttl_window() {
    let (cache, source, clock) = cache_over_counting();

    cache.get(1).await.unwrap();
    clock.advance(DEFAULT_TTL_MS / 2);
    cache.get(1).await.unwrap();
    assert_eq!(source.calls_for(1), 1);

    clock.advance(DEFAULT_TTL_MS / 2);
    cache.get(1).await.unwrap();
    assert_eq!(source.calls_for(1), 2);
}

#[tokio::test]
async fn fetching_one_page_does_not_touch_anothers_clock() {
    let (cache, source, clock) = cache_over_counting();

    cache.get(1).await.unwrap();
    clock.advance(DEFAULT_TTL_MS - 1);
    // This fetch of page 2 must not refresh page 1's entry.
    cache.get(2).await.unwrap();
    clock.advance(1);

    cache.get(1).await.unwrap();
    cache.get(2).await.unwrap();
    assert_eq!(source.calls_for(1), 2);
    assert_eq!(source.calls_for(2), 1);
}

#[tokio::test]
async fn explicit_invalidation_ignores_remaining_ttl() {
    let (cache, source, clock) = cache_over_counting();

    cache.get(1).await.unwrap();
    cache.get(2).await.unwrap();
    clock.advance(1); // entries are nowhere near expiry

    cache.invalidate_all();
    cache.get(1).await.unwrap();
    cache.get(2).await.unwrap();
    assert_eq!(source.calls_for(1), 2);
    assert_eq!(source.calls_for(2), 2);
}

#[tokio::test]
async fn shared_cache_serves_multiple_handles() {
    let (cache, source, _clock) = cache_over_counting();

    // Two holders of the same Arc'd cache, one underlying fetch.
    let first = Arc::clone(&cache);
    let second = Arc::clone(&cache);
    first.get(1).await.unwrap();
    let fetch = second.get(1).await.unwrap();

    assert!(fetch.from_cache);
    assert_eq!(source.calls_for(1), 1);
}
