//! Application layer holding the avatar resolution protocol.

pub mod resolver;

pub use resolver::{AvatarResolver, ProbeErrorPolicy};
