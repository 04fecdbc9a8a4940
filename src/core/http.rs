//! HTTP utilities for ESPN API communication

use crate::{config::EspnConfig, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};

/// Default headers for ESPN requests.
///
/// Adds the `SWID` / `espn_s2` cookie pair when both are configured; without
/// them only public leagues can be read.
pub fn espn_header_map(config: &EspnConfig) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let (Some(swid), Some(s2)) = (&config.swid, &config.espn_s2) {
        let cookie = format!("SWID={}; espn_s2={}", swid, s2);
        h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
    }
    Ok(h)
}
