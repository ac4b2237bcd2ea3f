pub mod listing_viewmodel;
pub mod session_viewmodel;

pub use listing_viewmodel::{DisplayPlan, ListingViewModel, NamedFilter, SearchCriteria};
pub use session_viewmodel::{LoginError, LoginOutcome, SessionViewModel};
