//! Persisted login state.
//!
//! Every read of `isLoggedIn`, `token` or `turo_user` goes through
//! [`SessionStore`]; nothing else touches those keys.

use crate::models::UserProfile;
use crate::utils::{
    BrowserStore, KeyValueStore, load_json, save_json,
    STORAGE_LOGGED_IN, STORAGE_PROFILE, STORAGE_TOKEN,
};

#[derive(Clone, Default)]
pub struct SessionStore<S: KeyValueStore = BrowserStore> {
    store: S,
}

impl SessionStore<BrowserStore> {
    pub fn browser() -> Self {
        Self { store: BrowserStore }
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.get_item(STORAGE_LOGGED_IN).as_deref() == Some("true")
    }

    /// Bearer token, `None` when absent or blank
    pub fn token(&self) -> Option<String> {
        self.store
            .get_item(STORAGE_TOKEN)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn profile(&self) -> Option<UserProfile> {
        load_json(&self.store, STORAGE_PROFILE)
    }

    /// Persist the token first, then the flag, so a half-written session
    /// never claims to be logged in without a token.
    pub fn save_login(&self, token: &str) -> Result<(), String> {
        self.store.set_item(STORAGE_TOKEN, token)?;
        self.store.set_item(STORAGE_LOGGED_IN, "true")?;
        log::info!("💾 [SESSION] Login saved");
        Ok(())
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), String> {
        save_json(&self.store, STORAGE_PROFILE, profile)
    }

    /// Logout: drop flag, token and profile
    pub fn clear(&self) {
        for key in [STORAGE_LOGGED_IN, STORAGE_TOKEN, STORAGE_PROFILE] {
            if let Err(e) = self.store.remove_item(key) {
                log::warn!("⚠️ [SESSION] {}", e);
            }
        }
        log::info!("👋 [SESSION] Session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStore;

    #[test]
    fn fresh_store_is_logged_out() {
        let session = SessionStore::new(MemoryStore::new());
        assert!(!session.is_logged_in());
        assert_eq!(session.token(), None);
        assert_eq!(session.profile(), None);
    }

    #[test]
    fn save_login_sets_flag_and_token() {
        let session = SessionStore::new(MemoryStore::new());
        session.save_login("abc").unwrap();
        assert!(session.is_logged_in());
        assert_eq!(session.token().as_deref(), Some("abc"));
    }

    #[test]
    fn flag_must_be_exactly_true() {
        let store = MemoryStore::new();
        store.set_item(STORAGE_LOGGED_IN, "yes").unwrap();
        assert!(!SessionStore::new(store).is_logged_in());
    }

    #[test]
    fn profile_is_stored_as_json_under_turo_user() {
        let store = MemoryStore::new();
        let session = SessionStore::new(store.clone());
        let profile = UserProfile {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: String::new(),
            place: "Pune".into(),
        };
        session.save_profile(&profile).unwrap();
        let raw = store.get_item(STORAGE_PROFILE).unwrap();
        assert!(raw.contains("\"place\":\"Pune\""));
        assert_eq!(session.profile(), Some(profile));
    }

    #[test]
    fn clear_removes_everything() {
        let store = MemoryStore::new();
        let session = SessionStore::new(store.clone());
        session.save_login("abc").unwrap();
        session.save_profile(&UserProfile::default()).unwrap();
        session.clear();
        assert_eq!(store.len(), 0);
        assert!(!session.is_logged_in());
    }
}
