// ============================================================================
// FILTER PILLS + SEARCH FORM
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use crate::dom::{add_class, get_element_by_id, input_value, query_selector_all, remove_class};
use crate::utils::{CLASS_CATEGORY_PILL, ID_DISCOVERY_TITLE, ID_SEARCH_PLACE, ID_SEARCH_SEATERS, ID_SEARCH_TYPE};
use crate::viewmodels::SearchCriteria;

/// Make `clicked` the only `.cat-pill` carrying `active`
pub fn highlight_pill(clicked: &Element) -> Result<(), JsValue> {
    for pill in query_selector_all(&format!(".{}", CLASS_CATEGORY_PILL))? {
        remove_class(&pill, "active")?;
    }
    add_class(clicked, "active")
}

pub fn read_search_criteria() -> SearchCriteria {
    SearchCriteria::new(
        &input_value(ID_SEARCH_PLACE),
        &input_value(ID_SEARCH_TYPE),
        &input_value(ID_SEARCH_SEATERS),
    )
}

/// Bring the results heading into view after a search
pub fn scroll_to_results() {
    let Some(title) = get_element_by_id(ID_DISCOVERY_TITLE) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    title.scroll_into_view_with_scroll_into_view_options(&options);
}
