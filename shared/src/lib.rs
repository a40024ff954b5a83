pub mod error;
pub mod models;
pub mod polls;

pub use error::PollError;
pub use models::*;
pub use polls::Polls;

#[cfg(test)]
mod tests;
