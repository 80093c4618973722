//! Liveness classification for probed avatar URLs.

/// Outcome of a single existence check against a URL.
///
/// - [`Liveness::Live`] - the resource exists and may be served as-is
/// - [`Liveness::Gone`] - the resource no longer exists; the cached entry must
///   be treated as a miss
/// - [`Liveness::Error`] - no clear signal (transport failure, timeout, or an
///   unexpected status); resolved by the configured
///   [`ProbeErrorPolicy`](crate::application::resolver::ProbeErrorPolicy)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liveness {
    Live,
    Gone,
    Error,
}
