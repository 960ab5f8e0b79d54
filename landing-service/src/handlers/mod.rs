//! HTTP handlers for the landing service.

pub mod generate;
pub mod health;

pub use generate::generate;
pub use health::{health_check, liveness, metrics};
