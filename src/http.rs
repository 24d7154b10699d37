//! Shared HTTP plumbing for the upstream clients
//!
//! Every request is bounded by the client timeout and every failure is folded
//! into a [`NotFoundCause`], so nothing from the network layer reaches callers.

use std::time::{Duration, Instant};

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::SahaytaError;
use crate::error::NotFoundCause;

/// Build a pooled client with a mandatory timeout
pub fn build_client(timeout: Duration, user_agent: &str) -> Result<Client, SahaytaError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .map_err(|e| SahaytaError::client(format!("Failed to create HTTP client: {e}")))
}

/// Strip credentials from a URL before it is logged
pub(crate) fn redact(url: &str) -> &str {
    url.split("appid=").next().unwrap_or(url)
}

/// Issue a GET and decode the JSON body
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<T, NotFoundCause> {
    let start_time = Instant::now();
    debug!("GET {}", redact(url));

    let response = client.get(url).send().await.map_err(classify)?;
    let status = response.status();

    debug!(
        "HTTP response received: {} in {:.3}s",
        status,
        start_time.elapsed().as_secs_f64()
    );

    if !status.is_success() {
        return Err(NotFoundCause::Status(status.as_u16()));
    }

    let body = response.bytes().await.map_err(classify)?;
    let data = serde_json::from_slice::<T>(&body)
        .map_err(|e| NotFoundCause::Malformed(e.to_string()))?;

    if start_time.elapsed().as_secs() > 5 {
        warn!(
            "Slow API response detected: {:.3}s",
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(data)
}

fn classify(error: reqwest::Error) -> NotFoundCause {
    if error.is_timeout() {
        NotFoundCause::Timeout
    } else {
        // Drop the URL: it may carry the weather API key
        NotFoundCause::Transport(error.without_url().to_string())
    }
}
