pub mod generator;
pub mod metrics;
pub mod prompt;
pub mod providers;

pub use generator::{GenerationError, LandingPageGenerator};
pub use metrics::{get_metrics, init_metrics};
