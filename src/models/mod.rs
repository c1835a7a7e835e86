//! Data models for cached content listings.
//!
//! - [`ContentCategory`] - The eight cache partitions (content class × VIP flag)
//! - [`ContentItem`] - One summary row of a content listing page
//! - [`CategoryInfo`] - Category reference data cached next to the items
//! - [`PreviewEntry`] - Slug-keyed preview image and display name
//!
//! All models serialize with the camelCase field names used by the listing API
//! and by the persisted cache file.

pub mod category;
pub mod content;
pub mod preview;

pub use category::{ContentCategory, ContentClass};
pub use content::{CategoryInfo, ContentItem};
pub use preview::PreviewEntry;
