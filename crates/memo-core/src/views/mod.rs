//! View-scoped state machines: list, editor, and detail/delete flows.
//!
//! Each view owns its projection of the store for its own lifetime
//! only; nothing here caches across views or refreshes in the
//! background.

pub mod detail;
pub mod editor;
pub mod list;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub use detail::{DeleteStage, DetailView};
pub use editor::{Editor, EditorMode, SubmitOutcome};
pub use list::ListView;

/// Cancellation flag for in-flight loads.
///
/// When the consuming view is torn down while a fetch is pending, it
/// cancels the token it handed out; the load then discards its result
/// silently instead of applying it to a view that no longer exists.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_flips_once() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());

        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }
}
