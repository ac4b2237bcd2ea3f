// ============================================================================
// CAR LIST VIEW - listing grid, empty state and "Login for more"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, clear_children, get_element_by_id, navigate, on_click};
use crate::utils::{EMPTY_LISTING_MESSAGE, ID_CARS_DISPLAY, ID_LOAD_MORE, LOGIN_PAGE};
use crate::viewmodels::DisplayPlan;
use crate::views::render_car_card;

/// Replace the listing containers with `plan`.
///
/// Returns `false` when the page has no listing container.
pub fn render_car_list(plan: &DisplayPlan) -> Result<bool, JsValue> {
    let Some(display) = get_element_by_id(ID_CARS_DISPLAY) else {
        return Ok(false);
    };
    let load_more = get_element_by_id(ID_LOAD_MORE);

    clear_children(&display);
    if let Some(container) = &load_more {
        clear_children(container);
    }

    if plan.is_empty() {
        append_child(&display, &render_empty_state()?)?;
        return Ok(true);
    }

    for car in &plan.cars {
        append_child(&display, &render_car_card(car)?)?;
    }

    if plan.show_more {
        if let Some(container) = &load_more {
            append_child(container, &render_login_prompt()?)?;
        }
    }

    log::info!("🖼️ [LISTING] Rendered {} cards ({} hidden)", plan.cars.len(), plan.hidden);
    Ok(true)
}

pub fn render_empty_state() -> Result<Element, JsValue> {
    let message = ElementBuilder::new("p")?
        .style("font-size", "18px")?
        .style("font-weight", "600")?
        .style("color", "#777")?
        .text(EMPTY_LISTING_MESSAGE)
        .build();

    Ok(ElementBuilder::new("div")?
        .id("no-cars-msg")?
        .style("padding", "40px")?
        .style("text-align", "center")?
        .style("width", "100%")?
        .style("background", "#f9f9f9")?
        .style("border-radius", "20px")?
        .child(message)?
        .build())
}

/// Blue "Login for more" box that sends visitors to the login page
pub fn render_login_prompt() -> Result<Element, JsValue> {
    let label = ElementBuilder::new("span")?
        .style("color", "white")?
        .style("font-weight", "bold")?
        .style("font-size", "16px")?
        .text("Login for more")
        .build();

    let button = ElementBuilder::new("div")?
        .class("login-for-more")
        .style("background-color", "#007bff")?
        .style("padding", "15px 40px")?
        .style("border-radius", "8px")?
        .style("display", "inline-block")?
        .style("cursor", "pointer")?
        .child(label)?
        .build();

    on_click(&button, |_e| {
        if let Err(e) = navigate(LOGIN_PAGE) {
            log::error!("❌ [LISTING] Could not open {}: {:?}", LOGIN_PAGE, e);
        }
    })?;

    Ok(button)
}
