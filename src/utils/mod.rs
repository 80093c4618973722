//! Utility functions shared across the application.
//!
//! - [`username`] - Username validation for the redirect path

pub mod username;
