use serde::{Deserialize, Serialize};

/// Filter parameters that produced a cached listing page
///
/// Empty strings mean "no filter" for that dimension. Equality is structural over
/// the whole record, so a cached page only matches a request with exactly the same
/// parameters (case-sensitive, no trimming).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search_name: String,
    pub selected_category: String,
    pub selected_month: String,
    pub date_filter: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_name(mut self, value: impl Into<String>) -> Self {
        self.search_name = value.into();
        self
    }

    pub fn with_selected_category(mut self, value: impl Into<String>) -> Self {
        self.selected_category = value.into();
        self
    }

    pub fn with_selected_month(mut self, value: impl Into<String>) -> Self {
        self.selected_month = value.into();
        self
    }

    pub fn with_date_filter(mut self, value: impl Into<String>) -> Self {
        self.date_filter = value.into();
        self
    }

    /// True when no dimension is filtered
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
