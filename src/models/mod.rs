pub mod car;
pub mod auth;

pub use car::{ApiCar, ApiOwner, Car, PriceType, parse_car_list};
pub use auth::{MeResponse, TokenResponse, UserProfile, error_detail};
