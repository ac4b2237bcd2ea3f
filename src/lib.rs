// ============================================================================
// CARHIVE WEB - rental marketplace front end (Rust + WASM, MVVM)
// ============================================================================
// - Views: functions that write to the DOM (no logic)
// - ViewModels: fetch/filter/search/login logic, no DOM
// - Services: HTTP and storage only
// - State: Rc<RefCell> holders
// - Models: wire types and the normalized Car record
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use crate::app::{App, LOGGED_IN_EVENT};
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        let level = if CONFIG.environment == "development" {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("🚗 CarHive front end starting (API: {})", CONFIG.api_base());

    let app = App::new();
    app.start()?;
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Registered once per page load, so forgetting the closure cannot pile up listeners
    if let Some(win) = web_sys::window() {
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            log::info!("🔄 [MAIN] {} received, refreshing", LOGGED_IN_EVENT);
            // Defer so the login handler finishes before the refetch starts
            gloo_timers::callback::Timeout::new(0, refresh_after_auth_change).forget();
        }) as Box<dyn FnMut(web_sys::Event)>);
        win.add_event_listener_with_callback(LOGGED_IN_EVENT, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn with_app<F>(action: F)
where
    F: FnOnce(&App),
{
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => action(app),
        None => log::warn!("⚠️ [MAIN] App is not initialised"),
    });
}

fn refresh_after_auth_change() {
    with_app(|app| {
        if let Err(e) = app.refresh_after_auth_change() {
            log::error!("❌ [MAIN] Refresh failed: {:?}", e);
        }
    });
}

/// Search form submit (place / type / seaters inputs)
#[wasm_bindgen]
pub fn perform_search() {
    with_app(|app| app.search());
}

/// Category pill click: "available", "price", anything else shows all.
///
/// Called as `filter_cars('price', this)` so the clicked pill is highlighted.
#[wasm_bindgen]
pub fn filter_cars(name: String, pill: web_sys::Element) {
    with_app(|app| app.apply_filter(&name, &pill));
}

/// Login modal submit
#[wasm_bindgen]
pub fn submit_login() {
    with_app(|app| app.login());
}

#[wasm_bindgen]
pub fn logout() {
    with_app(|app| {
        if let Err(e) = app.logout() {
            log::error!("❌ [MAIN] Logout refresh failed: {:?}", e);
        }
    });
}

/// Refetch and redraw the listing
#[wasm_bindgen]
pub fn rerender_listing() {
    with_app(|app| app.render_listing(None));
}
