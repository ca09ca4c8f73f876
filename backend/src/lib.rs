pub mod catchers;
pub mod cors;
pub mod error;
pub mod processor;
pub mod queries;
pub mod routes;

pub use shared::{cooldown, submitter, validation};
pub use shared::{models::*, error::*, submitter::*};

#[cfg(test)]
mod tests;
