//! POST helpers for the auth API. Every request is aborted after
//! [`REQUEST_TIMEOUT_MS`] so a hung server cannot leave a form spinning. The
//! deadline covers the body as well as the headers. The helpers hand back the
//! raw status and body; interpreting them belongs to the feature that knows
//! the contract.

use super::errors::AppError;
#[cfg(target_arch = "wasm32")]
use gloo_net::http::{Request, Response};
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
#[cfg(target_arch = "wasm32")]
use serde::Serialize;
#[cfg(target_arch = "wasm32")]
use web_sys::{AbortController, FormData};

/// Milliseconds before an unanswered request is aborted.
#[cfg(target_arch = "wasm32")]
pub(crate) const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Status code and (possibly empty) body text of a completed request.
#[cfg(target_arch = "wasm32")]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[cfg(target_arch = "wasm32")]
impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Why the response body could not be read.
#[derive(Debug)]
enum BodyError {
    /// The deadline fired while the body was still streaming.
    Aborted,
    Other(String),
}

fn timeout_error() -> AppError {
    AppError::Timeout("Request timed out. Please try again.".to_string())
}

/// An aborted body read is a timeout; any other read failure leaves an empty
/// body so the caller falls back to its generic message.
fn settle_body(read: Result<String, BodyError>) -> Result<String, AppError> {
    match read {
        Ok(body) => Ok(body),
        Err(BodyError::Aborted) => {
            tracing::warn!("response body timed out");
            Err(timeout_error())
        }
        Err(BodyError::Other(reason)) => {
            tracing::warn!(%reason, "failed to read response body");
            Ok(String::new())
        }
    }
}

/// Request payloads the API accepts.
#[cfg(target_arch = "wasm32")]
enum Payload {
    Json(String),
    /// The browser writes the multipart boundary header itself.
    Form(FormData),
}

/// Posts `body` as JSON.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<RawResponse, AppError> {
    let json = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    post(url, Payload::Json(json)).await
}

/// Posts `form` as `multipart/form-data`.
#[cfg(target_arch = "wasm32")]
pub async fn post_form(url: &str, form: FormData) -> Result<RawResponse, AppError> {
    post(url, Payload::Form(form)).await
}

#[cfg(target_arch = "wasm32")]
async fn post(url: &str, payload: Payload) -> Result<RawResponse, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let builder = Request::post(url).abort_signal(Some(&controller.signal()));
    let request = match payload {
        Payload::Json(json) => builder.header("Content-Type", "application/json").body(json),
        Payload::Form(form) => builder.body(form),
    }
    .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    // Held until the body is read; dropping it cancels the timer.
    let _deadline = Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort());
    tracing::debug!(%url, "sending request");
    let response = request.send().await.map_err(classify_send_error)?;

    read_raw(response).await
}

/// Aborts only come from the deadline.
#[cfg(target_arch = "wasm32")]
fn is_abort(err: &gloo_net::Error) -> bool {
    matches!(err, gloo_net::Error::JsError(js) if js.name == "AbortError")
}

#[cfg(target_arch = "wasm32")]
fn classify_send_error(err: gloo_net::Error) -> AppError {
    if is_abort(&err) {
        tracing::warn!("request timed out");
        return timeout_error();
    }
    tracing::warn!(error = %err, "request failed");
    AppError::Network(format!("Unable to reach the server: {err}"))
}

#[cfg(target_arch = "wasm32")]
async fn read_raw(response: Response) -> Result<RawResponse, AppError> {
    let status = response.status();
    let read = response.text().await.map_err(|err| {
        if is_abort(&err) {
            BodyError::Aborted
        } else {
            BodyError::Other(err.to_string())
        }
    });
    let body = settle_body(read)?;
    tracing::debug!(status, "received response");
    Ok(RawResponse { status, body })
}
