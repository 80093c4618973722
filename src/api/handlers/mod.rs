//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod avatar;
pub mod health;
pub mod home;

pub use avatar::avatar_handler;
pub use health::health_handler;
pub use home::{favicon_handler, home_handler};
