// ============================================================================
// CAR CARD VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::models::Car;
use crate::utils::RATING_PLACEHOLDER;

/// Colour of the status dot: only an explicit `false` is red
pub fn availability_color(car: &Car) -> &'static str {
    if car.is_available() { "green" } else { "red" }
}

/// `<a class="car-card">` linking to the detail page
pub fn render_car_card(car: &Car) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("a")?
        .class("car-card")
        .attr("href", &car.details_href())?
        .attr("data-car-id", &car.id.to_string())?
        .build();

    let img_box = ElementBuilder::new("div")?
        .class("car-img-box")
        .style("position", "relative")?
        .build();

    let img = ElementBuilder::new("img")?
        .attr("src", &car.photo)?
        .attr("alt", &car.name)?
        .attr("loading", "lazy")?
        .style("object-fit", "cover")?
        .style("width", "100%")?
        .style("height", "100%")?
        .build();

    let dot = ElementBuilder::new("div")?
        .class(&format!("availability-dot {}", availability_color(car)))
        .style("position", "absolute")?
        .style("bottom", "8px")?
        .style("left", "8px")?
        .style("width", "12px")?
        .style("height", "12px")?
        .style("border-radius", "50%")?
        .style("border", "2px solid white")?
        .style("background", availability_color(car))?
        .build();

    append_child(&img_box, &img)?;
    append_child(&img_box, &dot)?;

    let name = ElementBuilder::new("div")?
        .class("car-name")
        .text(&car.name)
        .build();

    let rating = ElementBuilder::new("div")?
        .class("car-rating")
        .text(RATING_PLACEHOLDER)
        .build();

    let price = ElementBuilder::new("div")?
        .class("car-price")
        .text(&car.price_text())
        .build();

    append_child(&card, &img_box)?;
    append_child(&card, &name)?;
    append_child(&card, &rating)?;
    append_child(&card, &price)?;

    Ok(card)
}
