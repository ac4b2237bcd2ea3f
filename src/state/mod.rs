// ============================================================================
// STATE MODULE - Rc<RefCell> state holders
// ============================================================================

pub mod car_cache;
pub mod app_state;

pub use car_cache::*;
pub use app_state::*;
