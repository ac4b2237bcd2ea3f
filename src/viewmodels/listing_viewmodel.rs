// ============================================================================
// LISTING VIEWMODEL - fetch, cache, filter, search, guest limit
// ============================================================================
// No DOM here. Views call in, get plain data back and render it.
// ============================================================================

use crate::config::CONFIG;
use crate::models::Car;
use crate::services::{ApiClient, MarketplaceApi, SessionStore};
use crate::state::CarCache;
use crate::utils::{BrowserStore, KeyValueStore};

/// Predefined derivation bound to a category pill
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NamedFilter {
    #[default]
    All,
    /// Drop cars explicitly marked unavailable
    Available,
    /// Most expensive first
    Price,
}

impl NamedFilter {
    /// Unknown names fall back to the full list
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "available" => NamedFilter::Available,
            "price" => NamedFilter::Price,
            _ => NamedFilter::All,
        }
    }

    pub fn apply(&self, cars: &[Car]) -> Vec<Car> {
        match self {
            NamedFilter::All => cars.to_vec(),
            NamedFilter::Available => cars.iter().filter(|car| car.is_available()).cloned().collect(),
            NamedFilter::Price => {
                let mut sorted = cars.to_vec();
                // sort_by is stable, equal prices keep insertion order
                sorted.sort_by(|a, b| b.price.total_cmp(&a.price));
                sorted
            }
        }
    }
}

/// Search form values. Each empty field matches every car.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SearchCriteria {
    place: String,
    car_type: String,
    seaters: String,
}

impl SearchCriteria {
    pub fn new(place: &str, car_type: &str, seaters: &str) -> Self {
        Self {
            place: place.trim().to_lowercase(),
            car_type: car_type.trim().to_string(),
            seaters: seaters.trim().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.place.is_empty() && self.car_type.is_empty() && self.seaters.is_empty()
    }

    pub fn matches(&self, car: &Car) -> bool {
        let place_ok = self.place.is_empty() || car.place.to_lowercase().contains(&self.place);
        let type_ok = self.car_type.is_empty() || car.car_type == self.car_type;
        let seaters_ok = self.seaters.is_empty() || car.seaters == self.seaters;
        place_ok && type_ok && seaters_ok
    }

    pub fn apply(&self, cars: &[Car]) -> Vec<Car> {
        cars.iter().filter(|car| self.matches(car)).cloned().collect()
    }
}

/// What the listing should show for a given list and session
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayPlan {
    pub cars: Vec<Car>,
    /// Cars held back from a visitor
    pub hidden: usize,
    /// Render the "Login for more" prompt
    pub show_more: bool,
}

impl DisplayPlan {
    /// Visitors see at most `guest_limit` cars (never less than one); the
    /// prompt only appears when something was actually held back.
    pub fn new(mut cars: Vec<Car>, authenticated: bool, guest_limit: usize) -> Self {
        let limit = guest_limit.max(1);
        let hidden = if !authenticated && cars.len() > limit {
            let hidden = cars.len() - limit;
            cars.truncate(limit);
            hidden
        } else {
            0
        };
        Self {
            cars,
            hidden,
            show_more: hidden > 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

pub struct ListingViewModel<A: MarketplaceApi = ApiClient, S: KeyValueStore = BrowserStore> {
    api: A,
    cache: CarCache,
    session: SessionStore<S>,
    guest_limit: usize,
}

impl ListingViewModel {
    /// Browser wiring: real API, localStorage session
    pub fn new(cache: CarCache) -> Self {
        Self::with_parts(ApiClient::new(), cache, SessionStore::browser(), CONFIG.listing.guest_car_limit)
    }
}

impl<A: MarketplaceApi, S: KeyValueStore> ListingViewModel<A, S> {
    pub fn with_parts(api: A, cache: CarCache, session: SessionStore<S>, guest_limit: usize) -> Self {
        Self {
            api,
            cache,
            session,
            guest_limit,
        }
    }

    /// Fetch the listing and refresh the cache.
    ///
    /// Never fails: errors are logged and produce an empty list, and the
    /// previous cache contents are left alone.
    pub async fn load_cars(&self) -> Vec<Car> {
        let token = self.session.token();
        match self.api.list_cars(token.as_deref()).await {
            Ok(cars) => {
                log::info!("📋 [LISTING] Caching {} cars", cars.len());
                self.cache.replace(cars.clone());
                cars
            }
            Err(e) => {
                log::warn!("⚠️ [LISTING] Could not load cars: {}", e);
                Vec::new()
            }
        }
    }

    /// Plan for an explicit list, or for a fresh fetch when `None`
    pub async fn display_plan(&self, cars: Option<Vec<Car>>) -> DisplayPlan {
        let cars = match cars {
            Some(cars) => cars,
            None => self.load_cars().await,
        };
        DisplayPlan::new(cars, self.session.is_logged_in(), self.guest_limit)
    }

    /// Named filter over the cached list (no fetch)
    pub fn filtered(&self, filter: NamedFilter) -> Vec<Car> {
        filter.apply(&self.cache.snapshot())
    }

    /// Search the cached list, fetching first when it is empty
    pub async fn search(&self, criteria: &SearchCriteria) -> Vec<Car> {
        if self.cache.is_empty() {
            self.load_cars().await;
        }
        let results = criteria.apply(&self.cache.snapshot());
        log::info!("🔍 [LISTING] {:?} matched {} cars", criteria, results.len());
        results
    }

    /// Resolve a detail-page id from the cache, falling back to the API
    pub async fn find_car(&self, id: i64) -> Option<Car> {
        if let Some(car) = self.cache.find(id) {
            return Some(car);
        }
        let token = self.session.token();
        match self.api.get_car(id, token.as_deref()).await {
            Ok(car) => Some(car),
            Err(e) => {
                log::warn!("⚠️ [LISTING] Car {} not available: {}", id, e);
                None
            }
        }
    }
}
