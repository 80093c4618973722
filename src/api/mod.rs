//! HTTP layer for request/response handling.
//!
//! This layer translates HTTP requests into resolver operations and formats
//! responses.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
