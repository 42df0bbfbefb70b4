//! Listing Client - paginated listings search
//!
//! Binds a listings view to the `listings by make and model` endpoint:
//! fetches pages, renders the pagination controls and tracks the
//! current page.

pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod render;
pub mod service;
pub mod types;

pub use config::ClientConfig;
pub use controller::{ListingController, PageState};
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use render::{PaginationContainer, TeraRenderer, ViewRenderer};
pub use service::{HttpListingsService, ListingsService};
pub use types::{IgnoreReason, Navigation, PageClick, YearFields};

// Re-export shared types for convenience
pub use shared::{Filter, Listing, ListingCriteria, PageResult};

/// Controller talking to the HTTP backend and rendering with Tera
pub type HttpListingController = ListingController<HttpListingsService, TeraRenderer>;

/// Build a controller for the backend described by `config`.
pub fn connect(config: &ClientConfig) -> ClientResult<HttpListingController> {
    let service = HttpListingsService::from_config(config)?;
    let renderer = TeraRenderer::new(PaginationContainer::new(config.container.clone()));
    Ok(ListingController::new(service, renderer))
}
