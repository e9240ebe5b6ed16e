//! Backend DTOs as consumed by the booking pages.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON shape. They are read-only views:
//! nothing here is persisted or mutated by the client. The backend is a PHP
//! service, so numbers sometimes arrive as strings (`"5000000.00"`) and
//! booleans as `0`/`1`; the deserializers below accept both forms.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Every successful response wraps its payload in `{ "data": ... }`.
/// A `null` payload means the resource does not exist.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

/// A bookable office space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Office {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    pub slug: String,
    pub name: String,
    /// Storage-relative path of the cover image.
    pub thumbnail: String,
    /// Price in rupiah for the whole rental duration.
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub price: i64,
    /// Rental duration in working days.
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub duration: i64,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub address: String,
    pub city: CityRef,
    #[serde(default)]
    pub benefits: Vec<Benefit>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// The city summary embedded in an office.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRef {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub name: String,
}

/// Gallery image of an office.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub id: Option<i64>,
    pub photo: String,
}

/// A city with the offices located in it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub id: Option<i64>,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default, rename = "officeSpaces", alias = "office_spaces")]
    pub office_spaces: Vec<Office>,
}

/// Body of `POST /booking-transaction`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone_number: String,
    pub started_at: String,
    pub office_space_id: i64,
    pub total_amount: i64,
}

/// The booking record returned after a successful submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_trx_id: String,
    // Echoed form fields; the booking already exists, so their shape never
    // fails the response.
    #[serde(default, deserialize_with = "deserialize_string_lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_string_lenient")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "deserialize_string_lenient")]
    pub started_at: String,
    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub total_amount: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub office_space_id: Option<i64>,
}

/// Body of `POST /check-booking`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckBookingRequest {
    pub phone_number: String,
    pub booking_trx_id: String,
}

/// Booking status as returned by `POST /check-booking`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub booking_trx_id: String,
    pub name: String,
    pub phone_number: String,
    pub started_at: String,
    #[serde(default)]
    pub ended_at: String,
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub is_paid: bool,
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub duration: i64,
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub total_amount: i64,
    pub office: Office,
}

fn deserialize_opt_i64_lenient<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    i64_from_value(&value).map(Some).map_err(D::Error::custom)
}

fn deserialize_i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    i64_from_value(&value).map_err(D::Error::custom)
}

fn i64_from_value(value: &serde_json::Value) -> Result<i64, String> {
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            number
                .as_f64()
                .and_then(integral_f64)
                .ok_or_else(|| "expected integer-compatible number".to_owned())
        }
        serde_json::Value::String(raw) => {
            let raw = raw.trim();
            if let Ok(int) = raw.parse::<i64>() {
                return Ok(int);
            }
            raw.parse::<f64>()
                .ok()
                .and_then(integral_f64)
                .ok_or_else(|| format!("expected numeric string, got {raw:?}"))
        }
        _ => Err("expected number".to_owned()),
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn integral_f64(float: f64) -> Option<i64> {
    if float.is_finite() && float.fract() == 0.0 && float >= i64::MIN as f64 && float <= i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}

fn deserialize_string_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => text,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn deserialize_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::Null => Ok(false),
        other => match i64_from_value(&other) {
            Ok(0) => Ok(false),
            Ok(1) => Ok(true),
            _ => Err(D::Error::custom("expected boolean or 0/1")),
        },
    }
}
