use std::sync::Arc;

use crate::application::resolver::AvatarResolver;
use crate::infrastructure::cache::AvatarCache;
use crate::infrastructure::provider::IdentityProvider;

/// Shared application state injected into all handlers.
///
/// Handles are acquired once at startup in [`crate::server::run`] and reused;
/// there is no process-wide mutable singleton.
#[derive(Clone)]
pub struct AppState {
    /// The avatar resolution core.
    pub resolver: Arc<AvatarResolver>,
    /// Provider client, used directly by the homepage for rate-limit status.
    pub provider: Arc<dyn IdentityProvider>,
    /// Cache handle, used directly by the health endpoint.
    pub cache: Arc<dyn AvatarCache>,
}

impl AppState {
    pub fn new(
        resolver: Arc<AvatarResolver>,
        provider: Arc<dyn IdentityProvider>,
        cache: Arc<dyn AvatarCache>,
    ) -> Self {
        Self {
            resolver,
            provider,
            cache,
        }
    }
}
