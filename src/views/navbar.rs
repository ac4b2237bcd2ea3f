// ============================================================================
// NAVBAR - auth-gated menu items
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::set_visible;
use crate::utils::{ID_ADD_CAR_ITEM, ID_LOGIN_ITEM, ID_PROFILE_DIVIDER, ID_PROFILE_ITEM};

/// Logged in: hide "Log in", show "Add car" and profile entries
pub fn apply_auth_visibility(logged_in: bool) -> Result<(), JsValue> {
    set_visible(ID_LOGIN_ITEM, !logged_in)?;
    for id in [ID_ADD_CAR_ITEM, ID_PROFILE_DIVIDER, ID_PROFILE_ITEM] {
        set_visible(id, logged_in)?;
    }
    Ok(())
}
