//! Handlers for the homepage and favicon.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::json;
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Template for the homepage.
///
/// Renders `templates/home.html` with the provider's current rate-limit
/// status: remaining calls, the hourly limit the budget resets to, and the
/// minutes until the reset.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub remaining: u32,
    pub hourly_limit: u32,
    pub minutes: i64,
}

/// Renders the homepage with live rate-limit status.
///
/// # Endpoint
///
/// `GET /`
///
/// The status is fetched from the provider on every render; it is never
/// cached.
///
/// # Errors
///
/// Returns 502 Bad Gateway when the rate-limit call fails.
pub async fn home_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let status = state.provider.rate_limit_status().await.map_err(|e| {
        error!(error = %e, "rate limit status fetch failed");
        AppError::upstream("Identity provider request failed", json!({}))
    })?;

    Ok(HomeTemplate {
        remaining: status.remaining_hits,
        hourly_limit: status.hourly_limit,
        minutes: status.minutes_until_reset(Utc::now()),
    })
}

/// Answers favicon requests with a 404 so they never reach the resolver.
///
/// # Endpoint
///
/// `GET /favicon.ico`
pub async fn favicon_handler() -> AppError {
    AppError::not_found("No favicon", json!({}))
}
