//! HTTP helpers for the location search endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning empty results since the endpoint is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Request or decode failures degrade to "no suggestions"; the form keeps
//! working with manual input.

#![allow(clippy::unused_async)]

use super::types::LocationResponse;

/// Path of the server's location search route.
pub const SEARCH_PATH: &str = "/location";

/// Query `GET /location?search=<query>`.
///
/// Returns an empty response for blank queries, failed requests and
/// undecodable bodies.
pub async fn search_locations(query: &str) -> LocationResponse {
    if query.trim().is_empty() {
        return LocationResponse::default();
    }
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(SEARCH_PATH)
            .query([("search", query)])
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("location search: request failed: {e}");
                return LocationResponse::default();
            }
        };
        if !resp.ok() {
            log::warn!("location search: server returned {}", resp.status());
            return LocationResponse::default();
        }
        resp.json::<LocationResponse>().await.unwrap_or_else(|e| {
            log::warn!("location search: bad response body: {e}");
            LocationResponse::default()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        LocationResponse::default()
    }
}
