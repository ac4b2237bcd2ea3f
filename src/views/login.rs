// ============================================================================
// LOGIN VIEW - credential inputs and feedback
// ============================================================================
// The modal markup lives in the static page; this only reads and resets it.
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{alert, input_value, query_selector_all, set_input_value, set_style};
use crate::utils::{CLASS_MODAL_OVERLAY, ID_LOGIN_EMAIL, ID_LOGIN_PASSWORD};

pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub fn read_credentials() -> Credentials {
    Credentials {
        email: input_value(ID_LOGIN_EMAIL),
        password: input_value(ID_LOGIN_PASSWORD),
    }
}

pub fn clear_credentials() {
    set_input_value(ID_LOGIN_EMAIL, "");
    set_input_value(ID_LOGIN_PASSWORD, "");
}

pub fn show_login_message(message: &str) {
    alert(message);
}

/// Hide every modal overlay on the page
pub fn close_login_modal() -> Result<(), JsValue> {
    for modal in query_selector_all(&format!(".{}", CLASS_MODAL_OVERLAY))? {
        set_style(&modal, "display", "none")?;
    }
    Ok(())
}
