use crate::store::Store;
use std::sync::{Arc, Mutex};

/// Shared application state, cloned into each handler via axum's `State`
/// extractor.
///
/// All user and task data lives in one process-local `Store` behind a mutex.
/// Handlers never await while holding the guard, so store operations are
/// serialized even when axum dispatches requests concurrently.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> std::sync::MutexGuard<'_, Store> {
        self.store.lock().expect("store mutex poisoned")
    }
}
