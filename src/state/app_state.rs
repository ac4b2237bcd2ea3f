// ============================================================================
// APP STATE - Page-wide state shared by the exported entry points
// ============================================================================

use crate::state::CarCache;

/// Lives as long as the page. Cloning shares the underlying state.
#[derive(Clone, Default)]
pub struct AppState {
    /// Last fetched listing, read by filters and searches
    pub cars: CarCache,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
