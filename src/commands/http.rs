//! POST to a reload endpoint

use std::time::Duration;

use pokego::{poke_http, ReloadTarget};

pub async fn http(url: &str, timeout: Duration, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let target = ReloadTarget::post(url, timeout);

    poke_http(&target, verbose)
        .await
        .map_err(|e| format!("HTTP request failed: {}", e))?;

    Ok(())
}
