pub mod error;
pub mod api_client;
pub mod session_service;

pub use error::ApiError;
pub use api_client::{ApiClient, MarketplaceApi};
pub use session_service::SessionStore;
