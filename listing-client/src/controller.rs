//! Listing controller - page state and navigation.
//!
//! The controller owns the [`PageState`] of a listings view. Both
//! operations issue one request to the [`ListingsService`] and apply the
//! response when it arrives. Every request carries a sequence token;
//! only the response to the latest request is applied, so a slow
//! response can never overwrite a newer page.

use std::sync::atomic::{AtomicU64, Ordering};

use shared::{Filter, Listing, PER_PAGE, PageResult, Pagination, total_pages};
use tokio::sync::RwLock;

use crate::render::ViewRenderer;
use crate::service::ListingsService;
use crate::types::{IgnoreReason, Navigation, PageClick, YearFields};
use crate::ClientResult;

// ============================================================================
// Page State
// ============================================================================

/// Listings shown by the view together with the pagination counters.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub listings: Vec<Listing>,
    /// Current page (1-based)
    pub current_page: u32,
    pub per_page: u32,
    pub total_records: u64,
    pub total_pages: u32,
    /// Pagination markup received with the last page
    pub pagination_markup: String,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            listings: Vec::new(),
            current_page: 1,
            per_page: PER_PAGE,
            total_records: 0,
            total_pages: 0,
            pagination_markup: String::new(),
        }
    }
}

impl PageState {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.current_page, self.per_page, self.total_records)
    }

    /// Replace the contents with a fetched page shown as `page`.
    fn apply(&mut self, result: PageResult, page: u32) {
        self.listings = result.listings;
        self.total_records = result.total_records;
        self.per_page = PER_PAGE;
        self.total_pages = total_pages(self.total_records, self.per_page);
        self.current_page = page;
        self.pagination_markup = result.pagination_markup;
    }
}

/// Page a click leads to from `current`, or why it leads nowhere.
pub fn target_page(current: u32, total_pages: u32, click: PageClick) -> Result<u32, IgnoreReason> {
    let pagination = Pagination {
        page: current,
        per_page: PER_PAGE,
        total: 0,
        total_pages,
    };
    match click {
        PageClick::Previous if pagination.is_first() => Err(IgnoreReason::AtFirstPage),
        PageClick::Previous => Ok(current - 1),
        PageClick::Next if pagination.is_last() => Err(IgnoreReason::AtLastPage),
        PageClick::Next => Ok(current + 1),
        PageClick::GoTo(page) if page == current => Err(IgnoreReason::SamePage),
        PageClick::GoTo(page) if !pagination.contains(page) => Err(IgnoreReason::OutOfRange(page)),
        PageClick::GoTo(page) => Ok(page),
    }
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Default)]
struct Inner {
    state: PageState,
    /// Page requested by the latest in-flight request
    pending_page: Option<u32>,
}

/// Controller binding a listings view to the listings service.
pub struct ListingController<S, R> {
    service: S,
    renderer: R,
    inner: RwLock<Inner>,
    sequence: AtomicU64,
}

impl<S: ListingsService, R: ViewRenderer> ListingController<S, R> {
    pub fn new(service: S, renderer: R) -> Self {
        Self {
            service,
            renderer,
            inner: RwLock::new(Inner::default()),
            sequence: AtomicU64::new(0),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Snapshot of the current state
    pub async fn state(&self) -> PageState {
        self.inner.read().await.state.clone()
    }

    /// Page of the request in flight, if any
    pub async fn pending_page(&self) -> Option<u32> {
        self.inner.read().await.pending_page
    }

    /// Search with a new filter and show its first page.
    pub async fn load_first_page(&self, filter: &Filter) -> ClientResult<Navigation> {
        let token = self.begin(1).await;
        tracing::debug!(
            make_id = %filter.make_id,
            model_id = %filter.model_id,
            token,
            "Loading first page"
        );
        let result = self.service.fetch_page(&filter.criteria(1, &filter.year)).await;
        self.complete(token, 1, result).await
    }

    /// Follow a click on the pagination controls.
    ///
    /// Clicks that lead nowhere (previous on the first page, next on the
    /// last, the page already shown) return [`Navigation::Ignored`]
    /// without a request. The year sent is resolved from `years`.
    pub async fn go_to_page(
        &self,
        filter: &Filter,
        years: &YearFields,
        click: PageClick,
    ) -> ClientResult<Navigation> {
        let (target, token) = {
            let mut inner = self.inner.write().await;
            let current = inner.pending_page.unwrap_or(inner.state.current_page);
            let target = match target_page(current, inner.state.total_pages, click) {
                Ok(target) => target,
                Err(reason) => {
                    tracing::debug!(?click, current, ?reason, "Ignoring page click");
                    return Ok(Navigation::Ignored(reason));
                }
            };
            inner.pending_page = Some(target);
            (target, self.next_token())
        };

        let year = years.resolve();
        tracing::debug!(?click, page = target, year, token, "Loading page");
        let result = self.service.fetch_page(&filter.criteria(target, year)).await;
        self.complete(token, target, result).await
    }

    async fn begin(&self, page: u32) -> u64 {
        let mut inner = self.inner.write().await;
        inner.pending_page = Some(page);
        self.next_token()
    }

    /// Issue a new request token. Callers hold the state write lock.
    fn next_token(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, token: u64) -> bool {
        self.sequence.load(Ordering::SeqCst) == token
    }

    async fn complete(
        &self,
        token: u64,
        page: u32,
        result: ClientResult<PageResult>,
    ) -> ClientResult<Navigation> {
        let mut inner = self.inner.write().await;
        if !self.is_latest(token) {
            tracing::warn!(token, page, "Discarding response to superseded request");
            return Ok(Navigation::Superseded);
        }
        inner.pending_page = None;

        match result {
            Ok(result) => {
                inner.state.apply(result, page);
                let state = &inner.state;
                tracing::info!(
                    page = state.current_page,
                    total_pages = state.total_pages,
                    total_records = state.total_records,
                    listings = state.listings.len(),
                    "Listings page applied"
                );
                // Rendered under the lock so outputs land in request order
                self.renderer
                    .render_pagination(&state.pagination_markup, state)
                    .await?;
                Ok(Navigation::Loaded { page })
            }
            Err(error) => {
                tracing::warn!(page, error = %error, "Listings fetch failed, keeping current page");
                self.renderer.render_failure(&error).await;
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_blocked_on_first_page() {
        assert_eq!(
            target_page(1, 3, PageClick::Previous),
            Err(IgnoreReason::AtFirstPage)
        );
        assert_eq!(target_page(2, 3, PageClick::Previous), Ok(1));
    }

    #[test]
    fn next_blocked_on_last_page() {
        assert_eq!(target_page(3, 3, PageClick::Next), Err(IgnoreReason::AtLastPage));
        assert_eq!(target_page(1, 3, PageClick::Next), Ok(2));
        assert_eq!(target_page(1, 0, PageClick::Next), Err(IgnoreReason::AtLastPage));
    }

    #[test]
    fn goto_blocks_current_and_out_of_range() {
        assert_eq!(target_page(3, 3, PageClick::GoTo(3)), Err(IgnoreReason::SamePage));
        assert_eq!(target_page(1, 3, PageClick::GoTo(3)), Ok(3));
        assert_eq!(
            target_page(1, 3, PageClick::GoTo(4)),
            Err(IgnoreReason::OutOfRange(4))
        );
        assert_eq!(
            target_page(1, 3, PageClick::GoTo(0)),
            Err(IgnoreReason::OutOfRange(0))
        );
    }

    #[test]
    fn apply_recomputes_page_count() {
        let mut state = PageState::default();
        state.apply(
            PageResult {
                listings: Vec::new(),
                total_records: 25,
                pagination_markup: "<ul></ul>".into(),
            },
            2,
        );
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.current_page, 2);
        assert_eq!(state.per_page, PER_PAGE);
        assert_eq!(state.pagination(), Pagination::new(2, PER_PAGE, 25));
    }
}
