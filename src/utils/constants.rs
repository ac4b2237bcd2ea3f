//! Storage keys and DOM ids shared with the static pages.

// localStorage keys, also read by the plain JS of profile.html
pub const STORAGE_LOGGED_IN: &str = "isLoggedIn";
pub const STORAGE_TOKEN: &str = "token";
pub const STORAGE_PROFILE: &str = "turo_user";

// Listing page
pub const ID_CARS_DISPLAY: &str = "cars-display-box";
pub const ID_LOAD_MORE: &str = "load-more-container";
pub const ID_SEARCH_PLACE: &str = "search-place";
pub const ID_SEARCH_TYPE: &str = "search-type";
pub const ID_SEARCH_SEATERS: &str = "search-seaters";
pub const ID_DISCOVERY_TITLE: &str = "discovery-title";
pub const CLASS_CATEGORY_PILL: &str = "cat-pill";

// Navbar items toggled by auth state
pub const ID_LOGIN_ITEM: &str = "login-item";
pub const ID_ADD_CAR_ITEM: &str = "add-car-item";
pub const ID_PROFILE_DIVIDER: &str = "profile-divider";
pub const ID_PROFILE_ITEM: &str = "profile-item";

// Login modal
pub const ID_LOGIN_EMAIL: &str = "login-email";
pub const ID_LOGIN_PASSWORD: &str = "login-password";
pub const CLASS_MODAL_OVERLAY: &str = "modal-overlay";

// Other pages
pub const ID_CAR_DETAILS: &str = "car-details-box";
pub const ID_PROFILE_BOX: &str = "profile-box";
pub const LOGIN_PAGE: &str = "login.html";

pub const EMPTY_LISTING_MESSAGE: &str = "No cars match your search";
pub const RATING_PLACEHOLDER: &str = "5.0 ★ (0 trips)";
