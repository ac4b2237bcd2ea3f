// ============================================================================
// CAR DETAILS VIEW - car-details.html?id={id}
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, clear_children};
use crate::models::Car;
use crate::views::availability_color;

/// Id carried by the detail link; `None` when missing or not a number
pub fn car_id_from_query(search: &str) -> Option<i64> {
    let params = web_sys::UrlSearchParams::new_with_str(search).ok()?;
    params.get("id")?.trim().parse().ok()
}

pub fn render_car_details(container: &Element, car: Option<&Car>) -> Result<(), JsValue> {
    clear_children(container);

    let Some(car) = car else {
        let missing = ElementBuilder::new("p")?
            .class("car-not-found")
            .text("Car not found")
            .build();
        return append_child(container, &missing);
    };

    let photo = ElementBuilder::new("img")?
        .id("main-view")?
        .class("car-details-photo")
        .attr("src", &car.photo)?
        .attr("alt", &car.name)?
        .build();
    append_child(container, &photo)?;

    let title = ElementBuilder::new("h1")?
        .class("car-details-name")
        .text(&car.name)
        .build();
    append_child(container, &title)?;

    let status = ElementBuilder::new("span")?
        .class(&format!("car-details-status {}", availability_color(car)))
        .text(if car.is_available() { "Available" } else { "Currently unavailable" })
        .build();
    append_child(container, &status)?;

    let facts = ElementBuilder::new("dl")?
        .class("car-details-facts")
        .build();
    let rows = [
        ("Price", car.price_text()),
        ("Location", car.place.clone()),
        ("Type", car.car_type.clone()),
        ("Seats", car.seaters.clone()),
        ("Features", car.features.clone()),
        ("Hosted by", car.host.clone()),
        ("Contact", car.contact.clone()),
    ];
    for (label, value) in rows.iter().filter(|(_, value)| !value.is_empty()) {
        append_child(&facts, &ElementBuilder::new("dt")?.text(label).build())?;
        append_child(&facts, &ElementBuilder::new("dd")?.text(value).build())?;
    }
    append_child(container, &facts)
}
