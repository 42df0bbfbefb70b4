//! View rendering - the page boundary of the controller
//!
//! The backend sends pagination controls as a markup fragment that
//! refers to the controller state (`{{ currentPage }}`, `{{ noOfPages }}` ...).
//! A [`ViewRenderer`] compiles that fragment against the state and puts
//! the result into the page.

use std::sync::Arc;

use async_trait::async_trait;
use tera::{Context, Tera};
use tokio::sync::RwLock;

use crate::controller::PageState;
use crate::{ClientError, ClientResult};

/// Sink for pagination markup
#[async_trait]
pub trait ViewRenderer: Send + Sync {
    /// Compile `markup` against `state` and replace the current pagination.
    ///
    /// Must be idempotent: every call fully replaces the previous output.
    async fn render_pagination(&self, markup: &str, state: &PageState) -> ClientResult<()>;

    /// Called when a fetch failed. The state has not changed.
    async fn render_failure(&self, _error: &ClientError) {}
}

/// A page region identified by a selector, holding the injected markup.
#[derive(Debug, Clone)]
pub struct PaginationContainer {
    selector: String,
    html: Arc<RwLock<String>>,
    error: Arc<RwLock<Option<String>>>,
}

impl PaginationContainer {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            html: Arc::new(RwLock::new(String::new())),
            error: Arc::new(RwLock::new(None)),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Current contents of the region
    pub async fn html(&self) -> String {
        self.html.read().await.clone()
    }

    /// Message of the last failure, cleared by the next successful render
    pub async fn error(&self) -> Option<String> {
        self.error.read().await.clone()
    }

    async fn replace(&self, html: String) {
        *self.html.write().await = html;
        *self.error.write().await = None;
    }

    async fn set_error(&self, message: String) {
        *self.error.write().await = Some(message);
    }
}

/// Renderer compiling the markup with Tera.
///
/// Autoescape is off: the fragment is HTML produced by our own backend.
#[derive(Debug, Clone)]
pub struct TeraRenderer {
    container: PaginationContainer,
}

impl TeraRenderer {
    pub fn new(container: PaginationContainer) -> Self {
        Self { container }
    }

    pub fn container(&self) -> &PaginationContainer {
        &self.container
    }
}

/// Template variables exposed to the pagination markup.
///
/// Both snake_case names and the camelCase names used by the existing
/// page templates are provided. `listings` holds the records of the
/// current page, as sent by the backend.
pub fn state_context(state: &PageState) -> Context {
    let mut context = Context::new();
    context.insert("current_page", &state.current_page);
    context.insert("per_page", &state.per_page);
    context.insert("total_records", &state.total_records);
    context.insert("total_pages", &state.total_pages);
    context.insert("listing_count", &state.listings.len());
    context.insert("listings", &state.listings);

    context.insert("currentPage", &state.current_page);
    context.insert("perPage", &state.per_page);
    context.insert("noOfRecords", &state.total_records);
    context.insert("noOfPages", &state.total_pages);
    context
}

#[async_trait]
impl ViewRenderer for TeraRenderer {
    async fn render_pagination(&self, markup: &str, state: &PageState) -> ClientResult<()> {
        let html = Tera::one_off(markup, &state_context(state), false)?;
        tracing::debug!(
            selector = self.container.selector(),
            bytes = html.len(),
            "Rendered pagination"
        );
        self.container.replace(html).await;
        Ok(())
    }

    async fn render_failure(&self, error: &ClientError) {
        self.container.set_error(error.to_string()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Listing;

    fn state(current_page: u32, total_records: u64) -> PageState {
        let mut state = PageState::default();
        state.total_records = total_records;
        state.total_pages = shared::total_pages(total_records, state.per_page);
        state.current_page = current_page;
        state
    }

    #[tokio::test]
    async fn compiles_markup_against_state() {
        let renderer = TeraRenderer::new(PaginationContainer::new(".row.listings-detail-info"));
        let markup = r#"<li class="active">{{ currentPage }}</li><span>{{ current_page }} / {{ noOfPages }} ({{ total_records }})</span>"#;

        renderer.render_pagination(markup, &state(2, 25)).await.unwrap();

        assert_eq!(
            renderer.container().html().await,
            r#"<li class="active">2</li><span>2 / 3 (25)</span>"#
        );
    }

    #[tokio::test]
    async fn each_render_replaces_previous_output() {
        let renderer = TeraRenderer::new(PaginationContainer::new("#pages"));
        renderer
            .render_pagination("<b>{{ currentPage }}</b>", &state(1, 30))
            .await
            .unwrap();
        renderer
            .render_pagination("<b>{{ currentPage }}</b>", &state(3, 30))
            .await
            .unwrap();
        renderer
            .render_pagination("<b>{{ currentPage }}</b>", &state(3, 30))
            .await
            .unwrap();

        assert_eq!(renderer.container().html().await, "<b>3</b>");
    }

    #[tokio::test]
    async fn loops_over_pages() {
        let renderer = TeraRenderer::new(PaginationContainer::new("#pages"));
        let markup = "{% for p in range(end=noOfPages) %}<a>{{ p + 1 }}</a>{% endfor %}";

        renderer.render_pagination(markup, &state(1, 22)).await.unwrap();

        assert_eq!(renderer.container().html().await, "<a>1</a><a>2</a><a>3</a>");
    }

    #[tokio::test]
    async fn markup_can_iterate_listings() {
        let renderer = TeraRenderer::new(PaginationContainer::new("#pages"));
        let mut state = state(1, 2);
        state.listings = vec![
            Listing::new(serde_json::json!({ "id": 7, "title": "Civic" })),
            Listing::new(serde_json::json!({ "id": 8, "title": "Accord" })),
        ];
        let markup = "{% for l in listings %}<p>{{ l.id }}:{{ l.title }}</p>{% endfor %}";

        renderer.render_pagination(markup, &state).await.unwrap();

        assert_eq!(
            renderer.container().html().await,
            "<p>7:Civic</p><p>8:Accord</p>"
        );
    }

    #[tokio::test]
    async fn broken_markup_keeps_previous_output() {
        let renderer = TeraRenderer::new(PaginationContainer::new("#pages"));
        renderer.render_pagination("<ul></ul>", &state(1, 5)).await.unwrap();

        let result = renderer.render_pagination("{{ unclosed", &state(1, 5)).await;

        assert!(matches!(result, Err(ClientError::Render(_))));
        assert_eq!(renderer.container().html().await, "<ul></ul>");
    }

    #[tokio::test]
    async fn failure_is_recorded_and_cleared_by_next_render() {
        let renderer = TeraRenderer::new(PaginationContainer::new("#pages"));
        renderer.render_failure(&ClientError::Unauthorized).await;
        assert_eq!(
            renderer.container().error().await.as_deref(),
            Some("Authentication required")
        );

        renderer.render_pagination("<ul></ul>", &state(1, 5)).await.unwrap();
        assert_eq!(renderer.container().error().await, None);
    }
}
