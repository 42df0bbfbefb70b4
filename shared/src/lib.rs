//! Shared types for the listings client
//!
//! Wire types exchanged with the listings backend and the pagination
//! helpers both sides agree on.

pub mod listing;
pub mod pagination;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use listing::{Filter, Listing, ListingCriteria, ListingsRequest, PageResult};
pub use pagination::{PER_PAGE, Pagination, total_pages};
