// Browse Session - One Render Pass Over the Pipeline
//
// Owns the interaction state the UI layer used to keep in ambient session
// variables: the current FilterState value, the pager and the shared page
// cache. Every interaction replaces the state wholesale and a render pass
// runs fetch -> filter -> sort -> project without partial results.

use crate::application::{cache::PageCache, pagination::Pager, pipeline, sort};
use crate::domain::{FilterState, JobRecord, SortKey};
use crate::error::Result;
use crate::port::Clock;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Characters of plain-text description shown on a collapsed card.
pub const PREVIEW_LEN: usize = 200;

/// Render-ready projection of one posting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobCard {
    pub title: String,
    pub company_name: String,
    pub location: Option<String>,
    pub url: String,
    pub remote: bool,
    pub job_types: Vec<String>,
    /// `YYYY-MM-DD`, when the posting carried a timestamp.
    pub posted_on: Option<String>,
    pub preview: String,
    pub description_text: String,
}

impl JobCard {
    fn from_record(job: &JobRecord) -> Self {
        Self {
            title: job.title.clone(),
            company_name: job.company_name.clone(),
            location: job.location.clone(),
            url: job.url.clone(),
            remote: job.remote,
            job_types: job.job_types.clone(),
            posted_on: job.posted_on(),
            preview: job.preview(PREVIEW_LEN),
            description_text: job.description_text.clone(),
        }
    }
}

/// Everything a front end needs to draw one page of results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub page: u32,
    pub cards: Vec<JobCard>,
    /// Records on the fetched page before filtering.
    pub fetched: usize,
    /// Records surviving the filters.
    pub matching: usize,
    pub from_cache: bool,
    pub can_next: bool,
    pub can_previous: bool,
    /// "N seconds/minutes ago" since the last explicit refresh.
    pub updated_label: String,
}

impl PageView {
    /// True when the fetch itself came back empty (walked past the end),
    /// as opposed to filters matching nothing.
    pub fn is_empty_page(&self) -> bool {
        self.fetched == 0
    }
}

/// Interaction state for one browsing user.
///
/// The cache is shared across sessions; the filter state and pager are not.
pub struct BrowseSession {
    cache: Arc<PageCache>,
    clock: Arc<dyn Clock>,
    state: FilterState,
    pager: Pager,
    last_updated: i64,
}

impl BrowseSession {
    pub fn new(cache: Arc<PageCache>, clock: Arc<dyn Clock>) -> Self {
        let last_updated = clock.now_millis();
        Self {
            cache,
            clock,
            state: FilterState::default(),
            pager: Pager::new(),
            last_updated,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// One full fetch -> filter -> sort -> project pass for the current
    /// state. Either the whole view renders or the error is returned for
    /// the front end to display.
    pub async fn render(&mut self) -> Result<PageView> {
        let fetch = self.cache.get(self.state.current_page).await?;
        self.pager.record_fetch(fetch.records.len());

        let visible = sort::apply(
            pipeline::apply(&fetch.records, &self.state),
            self.state.sort_key,
        );
        let cards: Vec<JobCard> = visible.into_iter().map(JobCard::from_record).collect();

        debug!(
            page = self.state.current_page,
            fetched = fetch.records.len(),
            matching = cards.len(),
            from_cache = fetch.from_cache,
            "render pass"
        );

        Ok(PageView {
            page: self.state.current_page,
            fetched: fetch.records.len(),
            matching: cards.len(),
            cards,
            from_cache: fetch.from_cache,
            can_next: self.pager.can_next(),
            can_previous: self.pager.can_previous(),
            updated_label: relative_age_label(self.clock.now_millis() - self.last_updated),
        })
    }

    pub fn set_remote_only(&mut self, remote_only: bool) {
        self.replace(self.state.clone().with_remote_only(remote_only));
    }

    pub fn set_location_query(&mut self, query: impl Into<String>) {
        self.replace(self.state.clone().with_location_query(query));
    }

    /// Raw comma-separated keyword input, split and normalized on the way in.
    pub fn set_keywords(&mut self, raw: &str) {
        self.replace(self.state.clone().with_keywords(raw));
    }

    pub fn set_job_types<I>(&mut self, types: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.replace(self.state.clone().with_job_types(types));
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.replace(self.state.clone().with_sort_key(sort_key));
    }

    /// Everything back to defaults, including the page position.
    pub fn clear_filters(&mut self) {
        self.replace(FilterState::default());
    }

    pub fn next_page(&mut self) {
        self.pager.next();
        self.state = self.state.clone().with_page(self.pager.current_page());
    }

    pub fn previous_page(&mut self) {
        self.pager.previous();
        self.state = self.state.clone().with_page(self.pager.current_page());
    }

    /// Drop every cached page and start over from page 1 with fresh data.
    pub fn refresh(&mut self) {
        self.cache.invalidate_all();
        self.pager.reset();
        self.state = self.state.clone().with_page(1);
        self.last_updated = self.clock.now_millis();
    }

    fn replace(&mut self, state: FilterState) {
        self.state = state;
        self.pager.reset();
    }
}

/// Human label for the time since the last refresh. Under a minute it
/// counts seconds, up to five minutes it counts minutes, after that it
/// snaps to the 10-minute grid starting at 5 (5, 15, 25, ...).
pub fn relative_age_label(delta_ms: i64) -> String {
    let seconds = delta_ms / 1000;
    let minutes = seconds / 60;

    if minutes < 1 {
        return format!("{} seconds ago", seconds);
    }
    if minutes <= 5 {
        return format!("{} minutes ago", minutes);
    }

    let display = 10 * ((minutes - 5) / 10) + 5;
    format!("{} minutes ago", display)
}

#[cfg(test)]
mod tests {
    use super::*;
    // Un-shadow the std Result aliased at file scope so the stub JobSource
    // impl matches the trait's `Result<_, FetchError>` signature.
    use crate::port::{FetchError, JobSource, NOMINAL_PAGE_SIZE};
    use async_trait::async_trait;
    use std::result::Result;
    use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

    /// Serves canned pages (1-based) and counts fetches.
    struct StubSource {
        pages: Vec<Vec<JobRecord>>,
        fetches: AtomicUsize,
    }

    impl StubSource {
        fn new(pages: Vec<Vec<JobRecord>>) -> Self {
            Self {
                pages,
                fetches: AtomicUsize::new(0),
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl JobSource for StubSource {
        async fn fetch_page(&self, page: u32) -> Result<Vec<JobRecord>, FetchError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .pages
                .get(page as usize - 1)
                .cloned()
                .unwrap_or_default())
        }
    }

    struct FixedClock(AtomicI64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn job(title: &str, company: &str, created_at: i64) -> JobRecord {
        let mut job = JobRecord::new_test(title, company);
        job.created_at = Some(created_at);
        job
    }

    fn session_over(pages: Vec<Vec<JobRecord>>) -> (BrowseSession, Arc<StubSource>) {
        let source = Arc::new(StubSource::new(pages));
        let clock = Arc::new(FixedClock(AtomicI64::new(0)));
        let cache = Arc::new(PageCache::new(source.clone(), clock.clone()));
        (BrowseSession::new(cache, clock), source)
    }

    #[tokio::test]
    async fn render_filters_sorts_and_projects() {
        let mut remote = job("Rust Engineer", "Ferris", 50);
        remote.remote = true;
        let mut older_remote = job("Rust Ops", "Crab", 10);
        older_remote.remote = true;
        let onsite = job("Java Developer", "Kaffee", 99);

        let (mut session, _) = session_over(vec![vec![onsite, older_remote, remote]]);
        session.set_remote_only(true);

        let view = session.render().await.unwrap();
        assert_eq!(view.fetched, 3);
        assert_eq!(view.matching, 2);
        let titles: Vec<&str> = view.cards.iter().map(|c| c.title.as_str()).collect();
        // Newest first among the remote pair.
        assert_eq!(titles, vec!["Rust Engineer", "Rust Ops"]);
        assert!(!view.can_next);
        assert!(!view.can_previous);
    }

    #[tokio::test]
    async fn filter_change_resets_the_page_position() {
        let full: Vec<JobRecord> = (0..NOMINAL_PAGE_SIZE)
            .map(|i| job(&format!("Job {}", i), "Acme", i as i64))
            .collect();
        let (mut session, _) = session_over(vec![full.clone(), full.clone(), full]);

        session.render().await.unwrap();
        session.next_page();
        session.render().await.unwrap();
        session.next_page();
        assert_eq!(session.state().current_page, 3);

        session.set_remote_only(true);
        assert_eq!(session.state().current_page, 1);
        let view = session.render().await.unwrap();
        assert_eq!(view.page, 1);
    }

    #[tokio::test]
    async fn empty_page_renders_with_only_the_way_back() {
        let full: Vec<JobRecord> = (0..NOMINAL_PAGE_SIZE)
            .map(|i| job(&format!("Job {}", i), "Acme", i as i64))
            .collect();
        let (mut session, _) = session_over(vec![full]);

        session.render().await.unwrap();
        session.next_page();
        let view = session.render().await.unwrap();

        assert!(view.is_empty_page());
        assert!(view.cards.is_empty());
        assert!(!view.can_next);
        assert!(view.can_previous);

        session.previous_page();
        let view = session.render().await.unwrap();
        assert_eq!(view.page, 1);
        assert_eq!(view.fetched, NOMINAL_PAGE_SIZE);
    }

    #[tokio::test]
    async fn refresh_drops_the_cache_and_restarts_at_page_one() {
        let (mut session, source) = session_over(vec![vec![job("A", "x", 1)]]);

        session.render().await.unwrap();
        session.render().await.unwrap();
        assert_eq!(source.fetch_count(), 1);

        session.refresh();
        let view = session.render().await.unwrap();
        assert_eq!(source.fetch_count(), 2);
        assert!(!view.from_cache);
        assert_eq!(view.page, 1);
    }

    #[tokio::test]
    async fn clear_filters_returns_to_the_default_state() {
        let (mut session, _) = session_over(vec![vec![job("A", "x", 1)]]);
        session.set_keywords("rust, async");
        session.set_location_query("berlin");
        session.set_sort_key(SortKey::CompanyName);

        session.clear_filters();
        assert_eq!(session.state(), &FilterState::default());
    }

    #[test]
    fn relative_age_snaps_to_the_ten_minute_grid() {
        assert_eq!(relative_age_label(30_000), "30 seconds ago");
        assert_eq!(relative_age_label(90_000), "1 minutes ago");
        assert_eq!(relative_age_label(5 * 60_000), "5 minutes ago");
        assert_eq!(relative_age_label(9 * 60_000), "5 minutes ago");
        assert_eq!(relative_age_label(16 * 60_000), "15 minutes ago");
        assert_eq!(relative_age_label(27 * 60_000), "25 minutes ago");
    }
}
