//! Application state.

use senti_core::Scorer;
use std::sync::Arc;

/// State shared across service handlers. The scorer is read-only after
/// startup, so handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<dyn Scorer>,
}

impl AppState {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self { scorer }
    }
}
