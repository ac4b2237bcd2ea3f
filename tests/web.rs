//! Browser tests for the DOM views. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use carhive_web::dom::{create_element, document, get_element_by_id};
use carhive_web::models::{Car, PriceType};
use carhive_web::viewmodels::DisplayPlan;
use carhive_web::views::{
    apply_auth_visibility, car_id_from_query, highlight_pill, render_car_card, render_car_list,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn car(id: i64, available: Option<bool>) -> Car {
    Car {
        id,
        name: format!("Car {}", id),
        place: "Pune".into(),
        contact: String::new(),
        host: "Car Owner".into(),
        car_type: "Sedan".into(),
        seaters: "4".into(),
        price: 500.0 * id as f64,
        price_type: PriceType::Day,
        features: String::new(),
        photo: "images/default-car.png".into(),
        available,
    }
}

/// Fresh element with `id` appended to <body>, replacing any previous one
fn mount(tag: &str, id: &str) -> Element {
    if let Some(old) = get_element_by_id(id) {
        old.remove();
    }
    let element = create_element(tag).unwrap();
    element.set_id(id);
    document().unwrap().body().unwrap().append_child(&element).unwrap();
    element
}

fn display_of(id: &str) -> String {
    get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

#[wasm_bindgen_test]
fn card_links_to_details_and_shows_price() {
    let card = render_car_card(&car(3, None)).unwrap();
    assert_eq!(card.tag_name(), "A");
    assert_eq!(card.get_attribute("href").as_deref(), Some("car-details.html?id=3"));
    let text = card.text_content().unwrap();
    assert!(text.contains("Car 3"));
    assert!(text.contains("Rs 1500 per day"));
    assert!(text.contains("5.0"));
    assert!(card.query_selector(".availability-dot.green").unwrap().is_some());
}

#[wasm_bindgen_test]
fn unavailable_car_gets_red_dot() {
    let card = render_car_card(&car(1, Some(false))).unwrap();
    assert!(card.query_selector(".availability-dot.red").unwrap().is_some());
}

#[wasm_bindgen_test]
fn guest_listing_shows_four_cards_and_prompt() {
    let display = mount("div", "cars-display-box");
    let load_more = mount("div", "load-more-container");

    let plan = DisplayPlan::new((1..=6).map(|id| car(id, None)).collect(), false, 4);
    assert!(render_car_list(&plan).unwrap());

    assert_eq!(display.query_selector_all(".car-card").unwrap().length(), 4);
    assert!(load_more.text_content().unwrap().contains("Login for more"));
}

#[wasm_bindgen_test]
fn empty_listing_shows_message_and_clears_prompt() {
    let display = mount("div", "cars-display-box");
    let load_more = mount("div", "load-more-container");
    load_more.set_inner_html("<span>stale</span>");

    let plan = DisplayPlan::new(Vec::new(), false, 4);
    assert!(render_car_list(&plan).unwrap());

    assert!(display.text_content().unwrap().contains("No cars match your search"));
    assert_eq!(load_more.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn listing_is_noop_without_container() {
    if let Some(old) = get_element_by_id("cars-display-box") {
        old.remove();
    }
    let plan = DisplayPlan::new(vec![car(1, None)], true, 4);
    assert!(!render_car_list(&plan).unwrap());
}

#[wasm_bindgen_test]
fn auth_visibility_toggles_menu() {
    for id in ["login-item", "add-car-item", "profile-divider", "profile-item"] {
        mount("li", id);
    }

    apply_auth_visibility(true).unwrap();
    assert_eq!(display_of("login-item"), "none");
    assert_eq!(display_of("profile-item"), "block");

    apply_auth_visibility(false).unwrap();
    assert_eq!(display_of("login-item"), "block");
    assert_eq!(display_of("add-car-item"), "none");
}

#[wasm_bindgen_test]
fn only_clicked_pill_is_active() {
    let all = mount("button", "pill-all");
    all.set_class_name("cat-pill active");
    let suv = mount("button", "pill-suv");
    suv.set_class_name("cat-pill");
    let luxury = mount("button", "pill-luxury");
    luxury.set_class_name("cat-pill");

    highlight_pill(&luxury).unwrap();
    assert!(luxury.class_list().contains("active"));
    assert!(!all.class_list().contains("active"));
    assert!(!suv.class_list().contains("active"));

    highlight_pill(&suv).unwrap();
    assert!(suv.class_list().contains("active"));
    assert!(!luxury.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn detail_id_is_read_from_query() {
    assert_eq!(car_id_from_query("?id=12"), Some(12));
    assert_eq!(car_id_from_query("?ref=home&id=7"), Some(7));
    assert_eq!(car_id_from_query("?id=abc"), None);
    assert_eq!(car_id_from_query(""), None);
}
