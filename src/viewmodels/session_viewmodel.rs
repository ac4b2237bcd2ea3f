// ============================================================================
// SESSION VIEWMODEL - login / logout
// ============================================================================
// Returns outcomes; the login view decides how to show them.
// ============================================================================

use crate::models::UserProfile;
use crate::services::{ApiClient, ApiError, MarketplaceApi, SessionStore};
use crate::utils::{BrowserStore, KeyValueStore};

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter both email and password.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error. Please check your network and try again.";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in successfully!";

/// Why a login attempt did not produce a session.
///
/// `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginError {
    #[error("{}", MISSING_CREDENTIALS_MESSAGE)]
    MissingCredentials,

    /// Server refused; carries its `detail` or the generic fallback
    #[error("{0}")]
    Rejected(String),

    #[error("{}", CONNECTION_ERROR_MESSAGE)]
    Connection,
}

impl From<ApiError> for LoginError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Network(_) => LoginError::Connection,
            other => LoginError::Rejected(
                other.detail().unwrap_or(LOGIN_FAILED_MESSAGE).to_string(),
            ),
        }
    }
}

/// Successful login; the profile is missing when `/auth/me` failed
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub profile: Option<UserProfile>,
}

pub struct SessionViewModel<A: MarketplaceApi = ApiClient, S: KeyValueStore = BrowserStore> {
    api: A,
    session: SessionStore<S>,
}

impl SessionViewModel {
    pub fn new() -> Self {
        Self::with_parts(ApiClient::new(), SessionStore::browser())
    }
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: MarketplaceApi, S: KeyValueStore> SessionViewModel<A, S> {
    pub fn with_parts(api: A, session: SessionStore<S>) -> Self {
        Self { api, session }
    }

    /// Exchange credentials for a token, persist it, then try to cache the
    /// profile. Nothing is written unless the server accepts the login.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, LoginError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        let token = match self.api.login(email, password).await {
            Ok(response) if !response.access_token.trim().is_empty() => response.access_token,
            Ok(_) => {
                log::error!("❌ [LOGIN] Server accepted the login but sent no token");
                return Err(LoginError::Rejected(LOGIN_FAILED_MESSAGE.to_string()));
            }
            Err(e) => {
                log::error!("❌ [LOGIN] {}", e);
                return Err(e.into());
            }
        };

        if let Err(e) = self.session.save_login(&token) {
            log::error!("❌ [LOGIN] Could not persist session: {}", e);
            self.session.clear();
            return Err(LoginError::Rejected(LOGIN_FAILED_MESSAGE.to_string()));
        }

        let profile = match self.api.me(&token).await {
            Ok(me) => {
                let profile = UserProfile::from(me);
                if let Err(e) = self.session.save_profile(&profile) {
                    log::error!("❌ [LOGIN] Could not persist profile: {}", e);
                }
                Some(profile)
            }
            Err(e) => {
                log::error!("❌ [LOGIN] Could not fetch user profile: {}", e);
                None
            }
        };

        log::info!("✅ [LOGIN] Logged in as {}", email);
        Ok(LoginOutcome { profile })
    }

    pub fn logout(&self) {
        self.session.clear();
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Car, MeResponse, TokenResponse};
    use crate::utils::MemoryStore;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct FakeAuth {
        login: Result<TokenResponse, ApiError>,
        me: Result<MeResponse, ApiError>,
        login_calls: Cell<usize>,
    }

    impl FakeAuth {
        fn new(login: Result<TokenResponse, ApiError>, me: Result<MeResponse, ApiError>) -> Self {
            Self { login, me, login_calls: Cell::new(0) }
        }

        fn accepting() -> Self {
            Self::new(
                Ok(TokenResponse { access_token: "jwt-123".into(), token_type: Some("bearer".into()) }),
                Ok(MeResponse {
                    full_name: Some("Asha Rao".into()),
                    email: "asha@example.com".into(),
                    phone: None,
                    location: Some("Pune".into()),
                }),
            )
        }
    }

    impl MarketplaceApi for FakeAuth {
        async fn list_cars(&self, _token: Option<&str>) -> Result<Vec<Car>, ApiError> {
            Ok(Vec::new())
        }

        async fn get_car(&self, _id: i64, _token: Option<&str>) -> Result<Car, ApiError> {
            Err(ApiError::Status { status: 404, detail: None })
        }

        async fn login(&self, _username: &str, _password: &str) -> Result<TokenResponse, ApiError> {
            self.login_calls.set(self.login_calls.get() + 1);
            self.login.clone()
        }

        async fn me(&self, _token: &str) -> Result<MeResponse, ApiError> {
            self.me.clone()
        }
    }

    fn viewmodel(api: FakeAuth, store: &MemoryStore) -> SessionViewModel<FakeAuth, MemoryStore> {
        SessionViewModel::with_parts(api, SessionStore::new(store.clone()))
    }

    #[test]
    fn empty_fields_block_without_request() {
        let store = MemoryStore::new();
        let vm = viewmodel(FakeAuth::accepting(), &store);

        assert_eq!(block_on(vm.login("", "secret")), Err(LoginError::MissingCredentials));
        assert_eq!(block_on(vm.login("   ", "secret")), Err(LoginError::MissingCredentials));
        assert_eq!(block_on(vm.login("a@b.in", "")), Err(LoginError::MissingCredentials));
        assert_eq!(vm.api.login_calls.get(), 0);
        assert_eq!(
            LoginError::MissingCredentials.to_string(),
            "Please enter both email and password."
        );
    }

    #[test]
    fn successful_login_persists_token_and_profile() {
        let store = MemoryStore::new();
        let vm = viewmodel(FakeAuth::accepting(), &store);

        let outcome = block_on(vm.login(" asha@example.com ", "secret")).unwrap();
        let session = SessionStore::new(store.clone());
        assert!(session.is_logged_in());
        assert_eq!(session.token().as_deref(), Some("jwt-123"));
        assert_eq!(session.profile(), outcome.profile);
        assert_eq!(outcome.profile.map(|p| p.place), Some("Pune".to_string()));
    }

    #[test]
    fn wrong_credentials_surface_server_detail_and_persist_nothing() {
        let store = MemoryStore::new();
        let vm = viewmodel(
            FakeAuth::new(
                Err(ApiError::Status { status: 401, detail: Some("Incorrect email or password".into()) }),
                Err(ApiError::Status { status: 401, detail: None }),
            ),
            &store,
        );

        let err = block_on(vm.login("asha@example.com", "wrong")).unwrap_err();
        assert_eq!(err.to_string(), "Incorrect email or password");
        assert_eq!(store.len(), 0);
        assert!(!vm.is_logged_in());
    }

    #[test]
    fn rejection_without_detail_uses_fallback() {
        let store = MemoryStore::new();
        let vm = viewmodel(
            FakeAuth::new(
                Err(ApiError::Status { status: 422, detail: None }),
                Err(ApiError::Network("unused".into())),
            ),
            &store,
        );
        let err = block_on(vm.login("a@b.in", "x")).unwrap_err();
        assert_eq!(err, LoginError::Rejected(LOGIN_FAILED_MESSAGE.to_string()));
    }

    #[test]
    fn network_failure_is_a_connection_error() {
        let store = MemoryStore::new();
        let vm = viewmodel(
            FakeAuth::new(
                Err(ApiError::Network("Failed to fetch".into())),
                Err(ApiError::Network("Failed to fetch".into())),
            ),
            &store,
        );
        let err = block_on(vm.login("a@b.in", "x")).unwrap_err();
        assert_eq!(err, LoginError::Connection);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn profile_failure_is_not_fatal() {
        let store = MemoryStore::new();
        let mut api = FakeAuth::accepting();
        api.me = Err(ApiError::Status { status: 500, detail: None });
        let vm = viewmodel(api, &store);

        let outcome = block_on(vm.login("a@b.in", "x")).unwrap();
        assert_eq!(outcome.profile, None);
        let session = SessionStore::new(store.clone());
        assert!(session.is_logged_in());
        assert_eq!(session.profile(), None);
    }

    #[test]
    fn blank_token_is_treated_as_rejection() {
        let store = MemoryStore::new();
        let mut api = FakeAuth::accepting();
        api.login = Ok(TokenResponse { access_token: " ".into(), token_type: None });
        let vm = viewmodel(api, &store);

        assert!(matches!(block_on(vm.login("a@b.in", "x")), Err(LoginError::Rejected(_))));
        assert_eq!(store.len(), 0);
    }

    /// localStorage that refuses writes (quota exceeded, private mode)
    #[derive(Clone, Default)]
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), String> {
            Err(format!("Could not write '{}'", key))
        }

        fn remove_item(&self, _key: &str) -> Result<(), String> {
            Ok(())
        }
    }

    #[test]
    fn unsaved_session_fails_the_login() {
        let vm = SessionViewModel::with_parts(FakeAuth::accepting(), SessionStore::new(ReadOnlyStore));

        let err = block_on(vm.login("a@b.in", "x")).unwrap_err();
        assert_eq!(err, LoginError::Rejected(LOGIN_FAILED_MESSAGE.to_string()));
        assert!(!vm.is_logged_in());
    }

    #[test]
    fn logout_clears_session() {
        let store = MemoryStore::new();
        let vm = viewmodel(FakeAuth::accepting(), &store);
        block_on(vm.login("a@b.in", "x")).unwrap();
        vm.logout();
        assert!(!vm.is_logged_in());
        assert_eq!(store.len(), 0);
    }
}
