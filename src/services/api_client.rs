// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: build the request, check the status, decode.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use crate::config::CONFIG;
use crate::models::{Car, ApiCar, MeResponse, TokenResponse, error_detail, parse_car_list};
use crate::services::error::ApiError;

/// Operations the front end needs from the CarHive backend.
///
/// Viewmodels are generic over this so they can run against a fake.
#[allow(async_fn_in_trait)]
pub trait MarketplaceApi {
    /// `GET /cars/`, token forwarded when present
    async fn list_cars(&self, token: Option<&str>) -> Result<Vec<Car>, ApiError>;

    /// `GET /cars/{id}`
    async fn get_car(&self, id: i64, token: Option<&str>) -> Result<Car, ApiError>;

    /// `POST /auth/login` with a form-encoded body
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError>;

    /// `GET /auth/me`
    async fn me(&self, token: &str) -> Result<MeResponse, ApiError>;
}

/// gloo-net client for the CarHive API
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    default_photo: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_photo: CONFIG.listing.default_car_photo.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn with_bearer(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

/// Turn a non-2xx response into [`ApiError::Status`], keeping the `detail`
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        detail: error_detail(&body),
    })
}

impl MarketplaceApi for ApiClient {
    async fn list_cars(&self, token: Option<&str>) -> Result<Vec<Car>, ApiError> {
        let url = format!("{}/cars/", self.base_url);
        log::info!("🚗 [API] GET {} (token: {})", url, token.is_some());

        let response = with_bearer(Request::get(&url), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(response).await?;

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        let (cars, rejected) = parse_car_list(body, &self.default_photo)
            .map_err(ApiError::Parse)?;

        for reason in &rejected {
            log::warn!("⚠️ [API] Skipping malformed {}", reason);
        }
        log::info!("✅ [API] {} cars received", cars.len());
        Ok(cars)
    }

    async fn get_car(&self, id: i64, token: Option<&str>) -> Result<Car, ApiError> {
        let url = format!("{}/cars/{}", self.base_url, id);

        let response = with_bearer(Request::get(&url), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(response).await?;

        let api_car = response
            .json::<ApiCar>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(Car::from_api(api_car, &self.default_photo))
    }

    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let url = format!("{}/auth/login", self.base_url);
        log::info!("🔐 [API] Logging in as {}", username);

        let form = web_sys::UrlSearchParams::new()
            .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
        form.append("username", username);
        form.append("password", password);

        let response = Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(response).await?;

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn me(&self, token: &str) -> Result<MeResponse, ApiError> {
        let url = format!("{}/auth/me", self.base_url);

        let response = with_bearer(Request::get(&url), Some(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(response).await?;

        response
            .json::<MeResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}
