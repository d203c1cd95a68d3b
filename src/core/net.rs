// src/core/net.rs
// Blocking HTTPS GET for the programming page.

use std::time::Duration;

use crate::config::consts::{TIMEOUT_SECS, USER_AGENT};
use crate::error::{ChannelError, Result};

/// Fetch `url` and return the response body.
///
/// Any non-2xx status is an error; there are no retries.
pub fn http_get(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()?;

    log::info!("GET {url}");
    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ChannelError::Status { status: status.as_u16(), url: s!(url) });
    }

    let body = resp.text()?;
    log::debug!("{} bytes from {url}", body.len());
    Ok(body)
}
