//! Shared application state for axum handlers.

use std::sync::Arc;

use smartroom_app::ports::StatusStore;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone` —
/// only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Device status store (read/toggle view only).
    pub store: Arc<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: StatusStore + 'static> AppState<S> {
    /// Create a new application state owning the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` store.
    ///
    /// Use this when the store is shared with sensor collaborators before
    /// constructing the HTTP state.
    pub fn from_arc(store: Arc<S>) -> Self {
        Self { store }
    }
}
