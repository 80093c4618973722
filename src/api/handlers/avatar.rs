//! Handler for the avatar redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a username to its currently-valid avatar image URL.
///
/// # Endpoint
///
/// `GET /{username}`
///
/// # Request Flow
///
/// The handler is presentation glue: it hands the username to the resolver
/// and turns the result into a 307 Temporary Redirect. All cache-consistency
/// decisions (probe, refetch, write-back) live in
/// [`AvatarResolver`](crate::application::resolver::AvatarResolver).
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid username and 502 Bad Gateway when
/// the identity provider call fails.
pub async fn avatar_handler(
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.resolver.resolve(&username).await?;

    Ok(Redirect::temporary(&url))
}
