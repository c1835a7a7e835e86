use serde::{Deserialize, Serialize};

/// Lightweight image + name pair remembered per content slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewEntry {
    pub image: String,
    pub name: String,
}

impl PreviewEntry {
    pub fn new(image: impl Into<String>, name: impl Into<String>) -> Self {
        Self { image: image.into(), name: name.into() }
    }
}
