pub mod car_card;
pub mod car_list;
pub mod car_details;
pub mod filters;
pub mod login;
pub mod navbar;
pub mod profile;

pub use car_card::{availability_color, render_car_card};
pub use car_list::{render_car_list, render_empty_state, render_login_prompt};
pub use car_details::{car_id_from_query, render_car_details};
pub use filters::{highlight_pill, read_search_criteria, scroll_to_results};
pub use login::{clear_credentials, close_login_modal, read_credentials, show_login_message, Credentials};
pub use navbar::apply_auth_visibility;
pub use profile::render_profile;
