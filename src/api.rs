//! HTTP Fetcher
//!
//! One-shot JSON GET over the browser `fetch` API.

use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::dom::describe_js;
use crate::models::Todo;

/// Headers sent with every request unless the caller overrides them
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[("Accept", "application/json")];

// ========================
// Errors
// ========================

/// Generic fetch failure. The message never carries status or body details;
/// those stay on `cause` for diagnostics.
#[derive(Debug, Error)]
#[error("Server error")]
pub struct ServerError {
    pub cause: FailureCause,
}

#[derive(Debug)]
pub enum FailureCause {
    /// Non-2xx response
    Status {
        status: u16,
        status_text: String,
        response: Response,
    },
    /// The request never produced a response (DNS, CORS, offline...)
    Transport(String),
    /// The body was not the expected JSON
    Decode(String),
}

impl ServerError {
    fn transport(value: JsValue) -> Self {
        Self {
            cause: FailureCause::Transport(describe_js(&value)),
        }
    }

    fn decode(message: impl Into<String>) -> Self {
        Self {
            cause: FailureCause::Decode(message.into()),
        }
    }

    /// HTTP status of the failing response, if there was one
    pub fn status(&self) -> Option<u16> {
        match &self.cause {
            FailureCause::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ========================
// Requests
// ========================

#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: Vec<(String, String)>,
}

/// Defaults first, caller headers second; a caller header replaces a default
/// of the same (case-insensitive) name.
pub fn merge_headers(defaults: &[(&str, &str)], overrides: &[(String, String)]) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = defaults
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    for (name, value) in overrides {
        match merged.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(name)) {
            Some(entry) => *entry = (name.clone(), value.clone()),
            None => merged.push((name.clone(), value.clone())),
        }
    }
    merged
}

/// GET `url` and parse the body as JSON. Any non-2xx status fails with
/// `ServerError` before the body is read.
pub async fn fetch_json(url: &str, options: &FetchOptions) -> Result<Value, ServerError> {
    let headers = Headers::new().map_err(ServerError::transport)?;
    for (name, value) in merge_headers(DEFAULT_HEADERS, &options.headers) {
        headers.set(&name, &value).map_err(ServerError::transport)?;
    }

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_headers(&headers);
    let request = Request::new_with_str_and_init(url, &init).map_err(ServerError::transport)?;

    let window = web_sys::window().ok_or_else(|| ServerError {
        cause: FailureCause::Transport("no window".to_string()),
    })?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ServerError::transport)?
        .dyn_into()
        .map_err(ServerError::transport)?;

    if !response.ok() {
        return Err(ServerError {
            cause: FailureCause::Status {
                status: response.status(),
                status_text: response.status_text(),
                response,
            },
        });
    }

    let text = JsFuture::from(response.text().map_err(ServerError::transport)?)
        .await
        .map_err(ServerError::transport)?
        .as_string()
        .ok_or_else(|| ServerError::decode("response body is not text"))?;
    serde_json::from_str(&text).map_err(|e| ServerError::decode(e.to_string()))
}

// ========================
// Todo Endpoints
// ========================

pub async fn fetch_todos(url: &str) -> Result<Vec<Todo>, ServerError> {
    let json = fetch_json(url, &FetchOptions::default()).await?;
    serde_json::from_value(json).map_err(|e| ServerError::decode(e.to_string()))
}
