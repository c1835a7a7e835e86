use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Content class without the VIP dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentClass {
    Asian,
    Western,
    Banned,
    Unknown,
}

impl ContentClass {
    pub const ALL: [ContentClass; 4] =
        [ContentClass::Asian, ContentClass::Western, ContentClass::Banned, ContentClass::Unknown];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentClass::Asian => "asian",
            ContentClass::Western => "western",
            ContentClass::Banned => "banned",
            ContentClass::Unknown => "unknown",
        }
    }
}

/// One of the eight cache partitions: four content classes crossed with VIP/non-VIP
///
/// The string names double as the keys of the persisted `caches` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentCategory {
    Asian,
    Western,
    Banned,
    Unknown,
    VipAsian,
    VipWestern,
    VipBanned,
    VipUnknown,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 8] = [
        ContentCategory::Asian,
        ContentCategory::Western,
        ContentCategory::Banned,
        ContentCategory::Unknown,
        ContentCategory::VipAsian,
        ContentCategory::VipWestern,
        ContentCategory::VipBanned,
        ContentCategory::VipUnknown,
    ];

    pub fn new(class: ContentClass, vip: bool) -> Self {
        match (class, vip) {
            (ContentClass::Asian, false) => ContentCategory::Asian,
            (ContentClass::Western, false) => ContentCategory::Western,
            (ContentClass::Banned, false) => ContentCategory::Banned,
            (ContentClass::Unknown, false) => ContentCategory::Unknown,
            (ContentClass::Asian, true) => ContentCategory::VipAsian,
            (ContentClass::Western, true) => ContentCategory::VipWestern,
            (ContentClass::Banned, true) => ContentCategory::VipBanned,
            (ContentClass::Unknown, true) => ContentCategory::VipUnknown,
        }
    }

    pub fn class(self) -> ContentClass {
        match self {
            ContentCategory::Asian | ContentCategory::VipAsian => ContentClass::Asian,
            ContentCategory::Western | ContentCategory::VipWestern => ContentClass::Western,
            ContentCategory::Banned | ContentCategory::VipBanned => ContentClass::Banned,
            ContentCategory::Unknown | ContentCategory::VipUnknown => ContentClass::Unknown,
        }
    }

    pub fn is_vip(self) -> bool {
        matches!(
            self,
            ContentCategory::VipAsian
                | ContentCategory::VipWestern
                | ContentCategory::VipBanned
                | ContentCategory::VipUnknown
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentCategory::Asian => "asian",
            ContentCategory::Western => "western",
            ContentCategory::Banned => "banned",
            ContentCategory::Unknown => "unknown",
            ContentCategory::VipAsian => "vipAsian",
            ContentCategory::VipWestern => "vipWestern",
            ContentCategory::VipBanned => "vipBanned",
            ContentCategory::VipUnknown => "vipUnknown",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `vipAsian`, `vipasian` and `vip-asian` spellings (case-insensitive)
impl FromStr for ContentCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], "");
        let (vip, class_name) = match normalized.strip_prefix("vip") {
            Some(rest) => (true, rest),
            None => (false, normalized.as_str()),
        };

        let class = ContentClass::ALL
            .into_iter()
            .find(|c| c.as_str() == class_name)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown category: '{}' (valid: asian, western, banned, unknown, with optional vip prefix)",
                    s
                )
            })?;

        Ok(ContentCategory::new(class, vip))
    }
}
