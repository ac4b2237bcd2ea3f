use serde::{Deserialize, Serialize};

/// Successful body of `POST /api/v1/auth/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Body of `GET /api/v1/auth/me`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MeResponse {
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Profile kept in storage under `turo_user`, read by the profile page
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub place: String,
}

impl From<MeResponse> for UserProfile {
    fn from(me: MeResponse) -> Self {
        Self {
            name: me.full_name.unwrap_or_default(),
            email: me.email,
            phone: me.phone.unwrap_or_default(),
            place: me.location.unwrap_or_default(),
        }
    }
}

/// Pull the human readable `detail` out of an error body.
///
/// FastAPI sends a string for auth failures but a list of objects for
/// validation errors; only the string form is shown to the user.
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|d| d.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
