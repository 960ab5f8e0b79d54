//! Domain models for the landing service.

pub mod brief;

pub use brief::{LandingBrief, REQUIRED_FIELDS_MESSAGE};
