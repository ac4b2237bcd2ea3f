// ============================================================================
// PROFILE VIEW - stored `turo_user` profile
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, clear_children};
use crate::models::UserProfile;
use crate::utils::LOGIN_PAGE;

pub fn render_profile(container: &Element, profile: Option<&UserProfile>) -> Result<(), JsValue> {
    clear_children(container);

    let Some(profile) = profile else {
        let link = ElementBuilder::new("a")?
            .attr("href", LOGIN_PAGE)?
            .text("Log in to see your profile")
            .build();
        return append_child(container, &link);
    };

    let fields = [
        ("Name", &profile.name),
        ("Email", &profile.email),
        ("Phone", &profile.phone),
        ("Location", &profile.place),
    ];
    for (label, value) in fields {
        let row = ElementBuilder::new("div")?
            .class("profile-row")
            .child(ElementBuilder::new("span")?.class("profile-label").text(label).build())?
            .child(ElementBuilder::new("span")?.class("profile-value").text(if value.is_empty() { "-" } else { value.as_str() }).build())?
            .build();
        append_child(container, &row)?;
    }
    Ok(())
}
