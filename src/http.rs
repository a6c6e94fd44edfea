//! HTTP poke: POST to an application's reload endpoint
//!
//! A single attempt is made. The timeout covers the whole exchange
//! (connect, send, and reading the response body).

use std::time::Duration;

use log::info;
use reqwest::{Method, StatusCode};

use crate::error::PokeError;

/// Default request timeout for `pokego http`
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to send a reload request
#[derive(Debug, Clone)]
pub struct ReloadTarget {
    pub url: String,
    pub method: Method,
    /// Request body; the CLI never sets one
    pub body: Option<String>,
    pub timeout: Duration,
}

impl ReloadTarget {
    /// Empty-bodied POST to `url`
    pub fn post(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            method: Method::POST,
            body: None,
            timeout,
        }
    }
}

/// Send the reload request and classify the response.
///
/// Succeeds with the status code when it is in `200..300`. Any other status
/// is an error carrying the code and the raw response body.
pub async fn poke_http(target: &ReloadTarget, verbose: bool) -> Result<StatusCode, PokeError> {
    let url = &target.url;

    let client = reqwest::Client::builder()
        .timeout(target.timeout)
        .build()
        .map_err(|source| PokeError::BuildRequest {
            url: url.clone(),
            source,
        })?;

    let mut builder = client.request(target.method.clone(), url.as_str());
    if let Some(body) = &target.body {
        builder = builder.body(body.clone());
    }
    let request = builder.build().map_err(|source| PokeError::BuildRequest {
        url: url.clone(),
        source,
    })?;

    if verbose {
        info!("Sending {} request to {}", target.method, url);
    }

    let response = client.execute(request).await.map_err(|source| {
        if source.is_timeout() {
            PokeError::Timeout {
                url: url.clone(),
                timeout: target.timeout,
            }
        } else {
            PokeError::Transport {
                url: url.clone(),
                source,
            }
        }
    })?;

    let status = response.status();
    let body = response.bytes().await.map_err(|source| {
        if source.is_timeout() {
            PokeError::Timeout {
                url: url.clone(),
                timeout: target.timeout,
            }
        } else {
            PokeError::ReadBody {
                url: url.clone(),
                source,
            }
        }
    })?;
    let body = String::from_utf8_lossy(&body);

    if verbose {
        info!("Response body: {}", body);
    }

    if !status.is_success() {
        return Err(PokeError::Status {
            status: status.as_u16(),
            body: body.into_owned(),
        });
    }

    info!("Successfully poked {} (status: {})", url, status.as_u16());
    Ok(status)
}
