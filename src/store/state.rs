use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entry::ContentCacheEntry;
use crate::models::{ContentCategory, PreviewEntry};

/// One optional entry per category; all eight keys are always serialized
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheSlots {
    pub asian: Option<ContentCacheEntry>,
    pub western: Option<ContentCacheEntry>,
    pub banned: Option<ContentCacheEntry>,
    pub unknown: Option<ContentCacheEntry>,
    pub vip_asian: Option<ContentCacheEntry>,
    pub vip_western: Option<ContentCacheEntry>,
    pub vip_banned: Option<ContentCacheEntry>,
    pub vip_unknown: Option<ContentCacheEntry>,
}

impl CacheSlots {
    pub fn slot(&self, category: ContentCategory) -> &Option<ContentCacheEntry> {
        match category {
            ContentCategory::Asian => &self.asian,
            ContentCategory::Western => &self.western,
            ContentCategory::Banned => &self.banned,
            ContentCategory::Unknown => &self.unknown,
            ContentCategory::VipAsian => &self.vip_asian,
            ContentCategory::VipWestern => &self.vip_western,
            ContentCategory::VipBanned => &self.vip_banned,
            ContentCategory::VipUnknown => &self.vip_unknown,
        }
    }

    pub fn slot_mut(&mut self, category: ContentCategory) -> &mut Option<ContentCacheEntry> {
        match category {
            ContentCategory::Asian => &mut self.asian,
            ContentCategory::Western => &mut self.western,
            ContentCategory::Banned => &mut self.banned,
            ContentCategory::Unknown => &mut self.unknown,
            ContentCategory::VipAsian => &mut self.vip_asian,
            ContentCategory::VipWestern => &mut self.vip_western,
            ContentCategory::VipBanned => &mut self.vip_banned,
            ContentCategory::VipUnknown => &mut self.vip_unknown,
        }
    }

    /// Present entries in category order
    pub fn iter(&self) -> impl Iterator<Item = (ContentCategory, &ContentCacheEntry)> {
        ContentCategory::ALL
            .into_iter()
            .filter_map(|category| self.slot(category).as_ref().map(|entry| (category, entry)))
    }

    pub fn occupied(&self) -> usize {
        self.iter().count()
    }
}

/// Everything the store owns and persists: category caches and the preview map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub caches: CacheSlots,
    #[serde(default)]
    pub preview_cache: BTreeMap<String, PreviewEntry>,
}
