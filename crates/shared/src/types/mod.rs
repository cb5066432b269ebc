//! Common types used across the application.

pub mod credits;
pub mod id;

pub use credits::Credits;
pub use id::*;
