//! Inputs and outcomes of page navigation.

use std::str::FromStr;

use crate::ClientError;

/// Label of the "previous page" control
pub const PREVIOUS_LABEL: &str = "«";
/// Label of the "next page" control
pub const NEXT_LABEL: &str = "»";

// ============================================================================
// Page Click
// ============================================================================

/// A click on one of the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageClick {
    Previous,
    Next,
    /// Jump to a page (1-based)
    GoTo(u32),
}

impl PageClick {
    /// Decode the text of a pagination control: `«`, `»` or a page number.
    pub fn from_label(label: &str) -> Result<Self, ClientError> {
        match label.trim() {
            PREVIOUS_LABEL => Ok(Self::Previous),
            NEXT_LABEL => Ok(Self::Next),
            other => other
                .parse::<u32>()
                .map(Self::GoTo)
                .map_err(|_| ClientError::InvalidLabel(label.to_string())),
        }
    }

    /// Text shown on the control for this click.
    pub fn label(&self) -> String {
        match self {
            Self::Previous => PREVIOUS_LABEL.to_string(),
            Self::Next => NEXT_LABEL.to_string(),
            Self::GoTo(page) => page.to_string(),
        }
    }
}

impl FromStr for PageClick {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

// ============================================================================
// Year Fields
// ============================================================================

/// The two year inputs a page may carry.
///
/// The search form has the primary field; the listing filter sidebar
/// adds a secondary one which wins whenever it is filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearFields {
    pub primary: String,
    pub secondary: String,
}

impl YearFields {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Year to send: the secondary field if non-empty, else the primary.
    pub fn resolve(&self) -> &str {
        if self.secondary.is_empty() {
            &self.primary
        } else {
            &self.secondary
        }
    }
}

// ============================================================================
// Navigation Outcome
// ============================================================================

/// Why a click did not trigger a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Previous clicked on the first page
    AtFirstPage,
    /// Next clicked on the last page
    AtLastPage,
    /// Clicked the page that is already shown
    SamePage,
    /// Page number outside `1..=total_pages`
    OutOfRange(u32),
}

/// Result of a controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// A page was fetched and applied to the state
    Loaded { page: u32 },
    /// The click was blocked; nothing was fetched
    Ignored(IgnoreReason),
    /// The response arrived after a newer request and was dropped
    Superseded,
}

impl Navigation {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_decode_to_clicks() {
        assert_eq!(PageClick::from_label("«").unwrap(), PageClick::Previous);
        assert_eq!(PageClick::from_label("»").unwrap(), PageClick::Next);
        assert_eq!(PageClick::from_label("3").unwrap(), PageClick::GoTo(3));
        assert_eq!(PageClick::from_label(" 12\n").unwrap(), PageClick::GoTo(12));
        assert_eq!("»".parse::<PageClick>().unwrap(), PageClick::Next);
    }

    #[test]
    fn unknown_labels_are_rejected() {
        for label in ["", "next", "-1", "2.5", "<<"] {
            assert!(
                matches!(PageClick::from_label(label), Err(ClientError::InvalidLabel(_))),
                "label {label:?}"
            );
        }
    }

    #[test]
    fn label_round_trips_through_controls() {
        for click in [PageClick::Previous, PageClick::Next, PageClick::GoTo(7)] {
            assert_eq!(PageClick::from_label(&click.label()).unwrap(), click);
        }
    }

    #[test]
    fn only_applied_pages_count_as_loaded() {
        assert!(Navigation::Loaded { page: 2 }.is_loaded());
        assert!(!Navigation::Superseded.is_loaded());
        assert!(!Navigation::Ignored(IgnoreReason::SamePage).is_loaded());
    }

    #[test]
    fn secondary_year_wins_when_set() {
        assert_eq!(YearFields::new("2014", "2016").resolve(), "2016");
        assert_eq!(YearFields::new("2014", "").resolve(), "2014");
        assert_eq!(YearFields::default().resolve(), "");
    }
}
