//! Listing DTOs
//!
//! Request and response shapes for `/listings_by_make_and_model.json`.

use serde::{Deserialize, Serialize};

// =============================================================================
// Request
// =============================================================================

/// Search filter sampled from the listings form.
///
/// Values are forwarded as-is; an empty string means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub make_id: String,
    pub model_id: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub year: String,
}

impl Filter {
    pub fn new(make_id: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            make_id: make_id.into(),
            model_id: model_id.into(),
            zip: String::new(),
            year: String::new(),
        }
    }

    pub fn with_zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = zip.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// Build the criteria for one page, using `year` in place of the filter's own year.
    pub fn criteria(&self, page: u32, year: &str) -> ListingCriteria {
        ListingCriteria {
            make_id: self.make_id.clone(),
            model_id: self.model_id.clone(),
            page,
            zip: self.zip.clone(),
            year: year.to_string(),
        }
    }
}

/// Criteria for a single page fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingCriteria {
    pub make_id: String,
    pub model_id: String,
    /// Page number (1-based)
    pub page: u32,
    pub zip: String,
    pub year: String,
}

/// Request body envelope: the backend reads the criteria from a `data` key.
///
/// ```json
/// { "data": { "make_id": "5", "model_id": "12", "page": 1, "zip": "94105", "year": "" } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsRequest {
    pub data: ListingCriteria,
}

impl From<ListingCriteria> for ListingsRequest {
    fn from(data: ListingCriteria) -> Self {
        Self { data }
    }
}

// =============================================================================
// Response
// =============================================================================

/// A single listing. The shape is owned by the backend and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Listing(pub serde_json::Value);

impl Listing {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Look up a top-level field of the listing record.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }
}

/// One page of listings as returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    #[serde(default)]
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub total_records: u64,
    /// Pagination controls rendered by the server
    #[serde(rename = "pag_html", default)]
    pub pagination_markup: String,
}
