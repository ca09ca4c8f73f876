pub mod cooldown;
pub mod error;
pub mod models;
pub mod submitter;
pub mod validation;

pub use cooldown::{evaluate, eligible_cutoff, GateDecision, COOLDOWN};
pub use error::ErrorResponse;
pub use models::*;
pub use submitter::Submitter;
pub use validation::*;

#[cfg(test)]
mod tests;
