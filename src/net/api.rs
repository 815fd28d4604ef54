//! REST helpers for the two backend endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs, so the state layer and tests compile without a
//! browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Log polling distinguishes a non-success status from a transport failure;
//! the chat call collapses every failure into `None` and the caller shows a
//! canned fallback. The asymmetry is contractual.

#![allow(clippy::unused_async)]

use thiserror::Error;

use super::types::LogEntry;

/// Why a poll of `/logs` produced no snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PollError {
    /// The server answered with a non-success status.
    #[error("Server returned {0}")]
    Status(u16),
    /// The request never completed, or the body was not a log array.
    #[error("Failed to connect to backend")]
    Transport,
}

/// Fetch the current log snapshot from `GET /logs`.
///
/// # Errors
///
/// `PollError::Status` for a non-2xx answer, `PollError::Transport` when
/// the request fails outright or the body cannot be decoded.
pub async fn fetch_logs() -> Result<Vec<LogEntry>, PollError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&crate::config::endpoint("/logs"))
            .send()
            .await
            .map_err(|_| PollError::Transport)?;
        if !resp.ok() {
            return Err(PollError::Status(resp.status()));
        }
        resp.json::<Vec<LogEntry>>()
            .await
            .map_err(|_| PollError::Transport)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(PollError::Transport)
    }
}

/// Ask the assistant about the current logs via `POST /chat`.
///
/// Returns the assistant's reply, or `None` on any failure: transport
/// error, rejected status, or a body without a `response` field. There is
/// no automatic retry; the user resends.
pub async fn request_analysis(message: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&crate::config::endpoint("/chat"))
            .json(&serde_json::json!({ "message": message }))
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        #[derive(serde::Deserialize)]
        struct ChatResponse {
            response: String,
        }
        let body: ChatResponse = resp.json().await.ok()?;
        Some(body.response)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        None
    }
}
