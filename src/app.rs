// ============================================================================
// APP - Binds the static pages to the viewmodels
// ============================================================================
// Every page runs the same module; each step checks for its own container
// and does nothing when the page does not have it.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{get_element_by_id, location_search, window};
use crate::models::Car;
use crate::services::SessionStore;
use crate::state::AppState;
use crate::utils::{ID_CAR_DETAILS, ID_CARS_DISPLAY, ID_PROFILE_BOX};
use crate::viewmodels::{ListingViewModel, NamedFilter, SessionViewModel};
use crate::viewmodels::session_viewmodel::LOGIN_SUCCESS_MESSAGE;
use crate::views::{
    apply_auth_visibility, car_id_from_query, clear_credentials, close_login_modal,
    highlight_pill, read_credentials, read_search_criteria, render_car_details,
    render_car_list, render_profile, scroll_to_results, show_login_message,
};

/// Custom window event fired after a successful login
pub const LOGGED_IN_EVENT: &str = "loggedIn";

pub struct App {
    state: AppState,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    /// Page load: auth-gated menu, then whatever views this page hosts
    pub fn start(&self) -> Result<(), JsValue> {
        self.refresh_auth()?;
        self.render_listing(None);
        self.render_car_details_page();
        self.render_profile_page()?;
        Ok(())
    }

    pub fn refresh_auth(&self) -> Result<(), JsValue> {
        apply_auth_visibility(SessionStore::browser().is_logged_in())
    }

    /// Render `cars`, or fetch first when `None`.
    ///
    /// Overlapping calls are not coordinated: whichever finishes last
    /// owns the container.
    pub fn render_listing(&self, cars: Option<Vec<Car>>) {
        if get_element_by_id(ID_CARS_DISPLAY).is_none() {
            return;
        }
        let cache = self.state.cars.clone();
        spawn_local(async move {
            let vm = ListingViewModel::new(cache);
            let plan = vm.display_plan(cars).await;
            if let Err(e) = render_car_list(&plan) {
                log::error!("❌ [LISTING] Render failed: {:?}", e);
            }
        });
    }

    /// Category pill click; `pill` is the element that was clicked
    pub fn apply_filter(&self, name: &str, pill: &Element) {
        let filter = NamedFilter::parse(name);
        if let Err(e) = highlight_pill(pill) {
            log::warn!("⚠️ [LISTING] Could not highlight pill: {:?}", e);
        }
        let cars = ListingViewModel::new(self.state.cars.clone()).filtered(filter);
        log::info!("🏷️ [LISTING] Filter {:?}: {} cars", filter, cars.len());
        self.render_listing(Some(cars));
    }

    /// Search form submit
    pub fn search(&self) {
        let criteria = read_search_criteria();
        let cache = self.state.cars.clone();
        spawn_local(async move {
            let vm = ListingViewModel::new(cache);
            let results = vm.search(&criteria).await;
            let plan = vm.display_plan(Some(results)).await;
            match render_car_list(&plan) {
                Ok(true) => scroll_to_results(),
                Ok(false) => {}
                Err(e) => log::error!("❌ [LISTING] Render failed: {:?}", e),
            }
        });
    }

    /// Login modal submit
    pub fn login(&self) {
        let credentials = read_credentials();
        spawn_local(async move {
            let vm = SessionViewModel::new();
            match vm.login(&credentials.email, &credentials.password).await {
                Ok(_) => {
                    notify_logged_in();
                    clear_credentials();
                    show_login_message(LOGIN_SUCCESS_MESSAGE);
                    if let Err(e) = close_login_modal() {
                        log::warn!("⚠️ [LOGIN] Could not close modal: {:?}", e);
                    }
                }
                Err(e) => show_login_message(&e.to_string()),
            }
        });
    }

    pub fn logout(&self) -> Result<(), JsValue> {
        SessionViewModel::new().logout();
        self.refresh_after_auth_change()
    }

    /// Menu visibility plus a fresh fetch so the token and guest limit apply
    pub fn refresh_after_auth_change(&self) -> Result<(), JsValue> {
        self.refresh_auth()?;
        self.render_listing(None);
        self.render_profile_page()
    }

    fn render_car_details_page(&self) {
        let Some(container) = get_element_by_id(ID_CAR_DETAILS) else {
            return;
        };
        let id = location_search().as_deref().and_then(car_id_from_query);
        let cache = self.state.cars.clone();
        spawn_local(async move {
            let car = match id {
                Some(id) => ListingViewModel::new(cache).find_car(id).await,
                None => {
                    log::warn!("⚠️ [DETAILS] Missing or invalid ?id=");
                    None
                }
            };
            if let Err(e) = render_car_details(&container, car.as_ref()) {
                log::error!("❌ [DETAILS] Render failed: {:?}", e);
            }
        });
    }

    fn render_profile_page(&self) -> Result<(), JsValue> {
        match get_element_by_id(ID_PROFILE_BOX) {
            Some(container) => render_profile(&container, SessionStore::browser().profile().as_ref()),
            None => Ok(()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Fire `loggedIn` on window; the listener registered in `main` refreshes
fn notify_logged_in() {
    let Some(win) = window() else {
        return;
    };
    match web_sys::Event::new(LOGGED_IN_EVENT) {
        Ok(event) => {
            if win.dispatch_event(&event).is_err() {
                log::warn!("⚠️ [LOGIN] Could not dispatch {}", LOGGED_IN_EVENT);
            }
        }
        Err(e) => log::warn!("⚠️ [LOGIN] Could not create {}: {:?}", LOGGED_IN_EVENT, e),
    }
}
