use serde::{Deserialize, Serialize};

use crate::store::StoreState;

/// Schema version of the persisted file; bump when the layout changes
pub const CACHE_VERSION: u32 = 1;

/// On-disk envelope: `{"version": N, "state": {"caches": ..., "previewCache": ...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    pub version: u32,
    pub state: StoreState,
}

impl PersistedState {
    pub fn new(state: StoreState) -> Self {
        Self { version: CACHE_VERSION, state }
    }
}

/// Serialize state into the envelope without cloning it
pub(crate) fn encode_state(state: &StoreState) -> serde_json::Result<String> {
    #[derive(Serialize)]
    struct Envelope<'a> {
        version: u32,
        state: &'a StoreState,
    }

    serde_json::to_string(&Envelope { version: CACHE_VERSION, state })
}
