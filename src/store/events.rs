use super::state::StoreState;
use crate::models::ContentCategory;

/// Change notification emitted after every store mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    CacheSet(ContentCategory),
    /// A read found the entry past its TTL and removed it
    CacheExpired(ContentCategory),
    CacheCleared(ContentCategory),
    AllCachesCleared,
    CacheAppended { category: ContentCategory, added: usize },
    PreviewSet(String),
}

/// Receives every store change together with the post-change state
pub trait StoreObserver {
    fn on_change(&mut self, event: &StoreEvent, state: &StoreState);
}

impl<F> StoreObserver for F
where
    F: FnMut(&StoreEvent, &StoreState),
{
    fn on_change(&mut self, event: &StoreEvent, state: &StoreState) {
        self(event, state)
    }
}
