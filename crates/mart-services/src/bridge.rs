//! Connects a host view's "reached the end" event to a feed.
//!
//! The host creates the bridge before the feed exists, then registers the
//! feed's [`LoadMore`] handle once it is mounted. Until then reach-end events
//! are accepted and ignored.

use crate::error::ServiceResult;
use crate::feed::{LoadMore, LoadOutcome};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Optional handle to a feed's load capability.
#[derive(Default)]
pub struct FeedBridge {
    handle: RwLock<Option<Arc<dyn LoadMore>>>,
}

impl FeedBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a feed, replacing any previous one.
    pub fn register(&self, handle: Arc<dyn LoadMore>) {
        *self.handle.write() = Some(handle);
        debug!("feed attached to bridge");
    }

    /// Detach the current feed, if any.
    pub fn unregister(&self) -> Option<Arc<dyn LoadMore>> {
        self.handle.write().take()
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.read().is_some()
    }

    /// Forward a reach-end event to the attached feed.
    ///
    /// Returns [`LoadOutcome::Unmounted`] when nothing is attached. Every event
    /// is forwarded; the feed's own in-flight guard absorbs bursts.
    pub async fn on_reach_end(&self) -> ServiceResult<LoadOutcome> {
        let handle = self.handle.read().clone();

        match handle {
            Some(handle) => handle.load_next_page().await,
            None => {
                debug!("reach-end before feed mounted");
                Ok(LoadOutcome::Unmounted)
            }
        }
    }
}

impl fmt::Debug for FeedBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedBridge")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
