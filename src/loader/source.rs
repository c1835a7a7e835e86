use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::filters::FilterState;
use crate::models::{CategoryInfo, ContentCategory, ContentItem};

/// One page of a content listing as delivered by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPage {
    #[serde(alias = "links")]
    pub items: Vec<ContentItem>,
    #[serde(default)]
    pub categories: Vec<CategoryInfo>,
    pub current_page: u32,
    pub total_pages: u32,
}

/// Upstream provider of listing pages (HTTP client, fixture, ...)
pub trait ContentSource {
    /// Fetch page `page` (1-based) of `category` under `filters`
    fn fetch_page(
        &mut self,
        category: ContentCategory,
        filters: &FilterState,
        page: u32,
    ) -> Result<ContentPage>;
}
