//! Network fetching with a timeout.
//!
//! The catalog is the only remote document the app reads; it is served from
//! the same origin as the app itself.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::dom;
use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

/// Outcome of racing a promise against a timer.
#[derive(Debug)]
pub enum RaceResult {
    Completed(JsValue),
    TimedOut,
    Error(String),
}

/// Race `promise` against a timer of `timeout_ms` milliseconds.
///
/// The timer resolves to `undefined`, so a promise that itself resolves to
/// `undefined` is reported as [`RaceResult::TimedOut`].
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = dom::window() else {
        return RaceResult::Error("window not available".to_string());
    };

    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let contenders = Array::of2(&promise, &timer);
    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(value) if value.is_undefined() => RaceResult::TimedOut,
        Ok(value) => RaceResult::Completed(value),
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| format!("{:?}", e))),
    }
}

/// GET `url` and deserialize the body as JSON.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let body = fetch_text(url).await?;
    serde_json::from_str(&body).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = dom::window().ok_or(FetchError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::SameOrigin);
    let request =
        Request::new_with_str_and_init(url, &init).map_err(|_| FetchError::RequestCreationFailed)?;

    let response = match race_with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS).await
    {
        RaceResult::Completed(value) => value
            .dyn_into::<Response>()
            .map_err(|_| FetchError::InvalidContent)?,
        RaceResult::TimedOut => return Err(FetchError::Timeout),
        RaceResult::Error(msg) => return Err(FetchError::NetworkError(msg)),
    };

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let body = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    JsFuture::from(body)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)
}
