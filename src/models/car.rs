use serde::{Deserialize, Serialize};

pub const DEFAULT_CAR_TYPE: &str = "Sedan";
pub const DEFAULT_SEATERS: &str = "4";
pub const DEFAULT_HOST: &str = "Car Owner";
pub const DEFAULT_CAR_NAME: &str = "Car";

/// Car as served by `GET /api/v1/cars/`.
///
/// Only `id` and `price_per_day` are mandatory; everything else may be
/// missing or `null` and is defaulted by [`Car::from_api`].
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApiCar {
    pub id: i64,
    pub price_per_day: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub car_type: Option<String>,
    #[serde(default)]
    pub seaters: Option<i64>,
    #[serde(default)]
    pub price_type: Option<String>,
    #[serde(default)]
    pub features: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub owner: Option<ApiOwner>,
    #[serde(default)]
    pub availability_status: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApiOwner {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Billing unit of a listing
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    #[default]
    Day,
    Hour,
}

impl PriceType {
    /// Anything other than "hour" bills per day
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()) {
            Some(ref s) if s == "hour" => PriceType::Hour,
            _ => PriceType::Day,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceType::Day => "day",
            PriceType::Hour => "hour",
        }
    }
}

/// Normalized listing used by the filter and render layers
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub place: String,
    pub contact: String,
    pub host: String,
    pub car_type: String,
    pub seaters: String,
    pub price: f64,
    pub price_type: PriceType,
    pub features: String,
    pub photo: String,
    pub available: Option<bool>,
}

impl Car {
    /// Map an API record, applying the listing defaults.
    ///
    /// Empty strings count as missing, and so does a seat count of zero.
    pub fn from_api(api: ApiCar, default_photo: &str) -> Self {
        let name = non_empty(api.name).unwrap_or_else(|| {
            let make_model = [api.make.as_deref(), api.model.as_deref()]
                .iter()
                .flatten()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            if make_model.is_empty() {
                DEFAULT_CAR_NAME.to_string()
            } else {
                make_model
            }
        });

        let host = non_empty(api.host)
            .or_else(|| api.owner.and_then(|owner| non_empty(owner.full_name)))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let seaters = match api.seaters {
            Some(n) if n > 0 => n.to_string(),
            _ => DEFAULT_SEATERS.to_string(),
        };

        Self {
            id: api.id,
            name,
            place: api.location.unwrap_or_default(),
            contact: api.contact.unwrap_or_default(),
            host,
            car_type: non_empty(api.car_type).unwrap_or_else(|| DEFAULT_CAR_TYPE.to_string()),
            seaters,
            price: api.price_per_day,
            price_type: PriceType::parse(api.price_type.as_deref()),
            features: api.features.unwrap_or_default(),
            photo: non_empty(api.photo).unwrap_or_else(|| default_photo.to_string()),
            available: api.availability_status,
        }
    }

    /// Only an explicit `false` marks a car as unavailable
    pub fn is_available(&self) -> bool {
        self.available != Some(false)
    }

    /// "Rs 1500 per day"
    pub fn price_text(&self) -> String {
        format!("Rs {} per {}", self.price, self.price_type.as_str())
    }

    /// Relative link to the detail page for this car
    pub fn details_href(&self) -> String {
        format!("car-details.html?id={}", self.id)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse a `/cars/` payload element by element.
///
/// Elements that do not match [`ApiCar`] are skipped and returned as
/// errors so the caller can log them; a non-array body is an error.
pub fn parse_car_list(
    body: serde_json::Value,
    default_photo: &str,
) -> Result<(Vec<Car>, Vec<String>), String> {
    let items = match body {
        serde_json::Value::Array(items) => items,
        other => return Err(format!("expected a JSON array of cars, got {}", json_kind(&other))),
    };

    let mut cars = Vec::with_capacity(items.len());
    let mut rejected = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<ApiCar>(item) {
            Ok(api) => cars.push(Car::from_api(api, default_photo)),
            Err(e) => rejected.push(format!("car #{}: {}", index, e)),
        }
    }
    Ok((cars, rejected))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PHOTO: &str = "images/default-car.png";

    fn map(value: serde_json::Value) -> Car {
        Car::from_api(serde_json::from_value(value).unwrap(), PHOTO)
    }

    #[test]
    fn missing_optional_fields_get_defaults() {
        let car = map(json!({ "id": 7, "price_per_day": 900.0, "location": "Pune" }));
        assert_eq!(car.car_type, "Sedan");
        assert_eq!(car.seaters, "4");
        assert_eq!(car.photo, PHOTO);
        assert_eq!(car.host, "Car Owner");
        assert_eq!(car.price_type, PriceType::Day);
        assert_eq!(car.available, None);
        assert_eq!(car.place, "Pune");
        assert_eq!(car.contact, "");
    }

    #[test]
    fn nulls_and_empty_strings_count_as_missing() {
        let car = map(json!({
            "id": 1,
            "price_per_day": 10,
            "car_type": "",
            "photo": null,
            "seaters": 0,
            "host": "",
            "owner": { "full_name": "Asha Rao" }
        }));
        assert_eq!(car.car_type, "Sedan");
        assert_eq!(car.photo, PHOTO);
        assert_eq!(car.seaters, "4");
        assert_eq!(car.host, "Asha Rao");
    }

    #[test]
    fn present_fields_are_renamed() {
        let car = map(json!({
            "id": 3,
            "name": "Swift",
            "location": "Pune City",
            "contact": "9999",
            "car_type": "Hatchback",
            "seaters": 5,
            "price_per_day": 1500.5,
            "price_type": "hour",
            "features": "AC",
            "photo": "https://img/x.png",
            "host": "Ravi",
            "availability_status": false
        }));
        assert_eq!(car.name, "Swift");
        assert_eq!(car.place, "Pune City");
        assert_eq!(car.car_type, "Hatchback");
        assert_eq!(car.seaters, "5");
        assert_eq!(car.price_type, PriceType::Hour);
        assert_eq!(car.host, "Ravi");
        assert!(!car.is_available());
        assert_eq!(car.price_text(), "Rs 1500.5 per hour");
    }

    #[test]
    fn negative_seaters_keep_the_car() {
        let (cars, rejected) = parse_car_list(
            json!([
                { "id": 1, "price_per_day": 100, "seaters": -1 },
                { "id": 2, "price_per_day": 200 }
            ]),
            PHOTO,
        )
        .unwrap();
        assert!(rejected.is_empty());
        assert_eq!(cars.len(), 2);
        assert_eq!(cars[0].seaters, "4");
    }

    #[test]
    fn name_falls_back_to_make_and_model() {
        let car = map(json!({ "id": 2, "price_per_day": 1, "make": "Tata", "model": "Nexon" }));
        assert_eq!(car.name, "Tata Nexon");
        let bare = map(json!({ "id": 2, "price_per_day": 1 }));
        assert_eq!(bare.name, "Car");
    }

    #[test]
    fn price_text_drops_trailing_zero_fraction() {
        let car = map(json!({ "id": 9, "price_per_day": 500.0 }));
        assert_eq!(car.price_text(), "Rs 500 per day");
        assert_eq!(car.details_href(), "car-details.html?id=9");
    }

    #[test]
    fn unknown_price_type_bills_per_day() {
        assert_eq!(PriceType::parse(Some("week")), PriceType::Day);
        assert_eq!(PriceType::parse(Some(" Hour ")), PriceType::Hour);
        assert_eq!(PriceType::parse(None), PriceType::Day);
    }

    #[test]
    fn invalid_elements_are_skipped_not_fatal() {
        let body = json!([
            { "id": 1, "price_per_day": 100 },
            { "id": "oops", "price_per_day": 100 },
            { "id": 3 },
            { "id": 4, "price_per_day": 400 }
        ]);
        let (cars, rejected) = parse_car_list(body, PHOTO).unwrap();
        assert_eq!(cars.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(rejected.len(), 2);
        assert!(rejected[0].starts_with("car #1"));
    }

    #[test]
    fn non_array_body_is_rejected() {
        let err = parse_car_list(json!({ "detail": "Not found" }), PHOTO).unwrap_err();
        assert!(err.contains("an object"));
    }
}
