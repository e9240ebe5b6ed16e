//! REST API helpers for the booking backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since pages only start
//! fetching after hydration and SSR renders their loading state.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Transport failures and non-2xx
//! statuses are classified as HTTP errors; body decoding problems are
//! `ApiError::Unexpected`. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Booking, BookingDetails, BookingRequest, CheckBookingRequest, City, Office};
use crate::config::ApiConfig;

#[cfg(any(test, feature = "hydrate"))]
use super::types::Envelope;

/// Build an absolute endpoint URL by appending path segments to the API base.
/// Segments are percent-encoded; empty, `.` and `..` segments are rejected
/// since the URL parser would collapse them onto another endpoint.
#[cfg(any(test, feature = "hydrate"))]
fn endpoint_url(base: &str, segments: &[&str]) -> Result<String, ApiError> {
    if let Some(bad) = segments.iter().find(|s| matches!(s.trim(), "" | "." | "..")) {
        return Err(ApiError::Unexpected(format!("invalid path segment {bad:?}")));
    }
    let mut url = url::Url::parse(base).map_err(|e| ApiError::Unexpected(format!("invalid API base URL {base:?}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| ApiError::Unexpected(format!("API base URL {base:?} cannot carry a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.into())
}

/// Unwrap the `{ "data": ... }` envelope of a successful response.
#[cfg(any(test, feature = "hydrate"))]
fn decode_envelope<T>(body: &str) -> Result<Option<T>, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| ApiError::Unexpected(format!("invalid response body: {e}")))
}

#[cfg(any(test, feature = "hydrate"))]
fn require_data<T>(data: Option<T>, what: &str) -> Result<T, ApiError> {
    data.ok_or_else(|| ApiError::Unexpected(format!("{what} response carried no data")))
}

#[cfg(feature = "hydrate")]
async fn read_envelope<T>(resp: gloo_net::http::Response) -> Result<Option<T>, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    super::error::check_status(resp.status())?;
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Unexpected(format!("reading response body: {e}")))?;
    decode_envelope(&body)
}

#[cfg(feature = "hydrate")]
async fn get_json<T>(url: &str) -> Result<Option<T>, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    log::debug!("GET {url}");
    let resp = gloo_net::http::Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_envelope(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<Option<T>, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    log::debug!("POST {url}");
    let resp = gloo_net::http::Request::post(url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Unexpected(format!("encoding request body: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_envelope(resp).await
}

/// Fetch an office by slug via `GET /office/{slug}`.
/// `Ok(None)` means the backend answered with `data: null`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the body does not match [`Office`].
pub async fn fetch_office(config: &ApiConfig, slug: &str) -> Result<Option<Office>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint_url(&config.api_base_url, &["office", slug])?;
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, slug);
        Err(ApiError::Unexpected("not available on server".to_owned()))
    }
}

/// Fetch a city and its offices via `GET /city/{slug}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the body does not match [`City`].
pub async fn fetch_city(config: &ApiConfig, slug: &str) -> Result<Option<City>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint_url(&config.api_base_url, &["city", slug])?;
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, slug);
        Err(ApiError::Unexpected("not available on server".to_owned()))
    }
}

/// Create a booking via `POST /booking-transaction`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the response does not carry a [`Booking`].
pub async fn create_booking(config: &ApiConfig, request: &BookingRequest) -> Result<Booking, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint_url(&config.api_base_url, &["booking-transaction"])?;
        let data = post_json(&url, request).await?;
        require_data(data, "booking")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unexpected("not available on server".to_owned()))
    }
}

/// Look up a booking via `POST /check-booking`.
/// `Ok(None)` means the backend found no matching booking.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the body does not match [`BookingDetails`].
pub async fn check_booking(
    config: &ApiConfig,
    request: &CheckBookingRequest,
) -> Result<Option<BookingDetails>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint_url(&config.api_base_url, &["check-booking"])?;
        post_json(&url, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unexpected("not available on server".to_owned()))
    }
}
