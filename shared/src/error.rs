use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PollError {
    #[error("No polls found")]
    NoPolls,
    #[error("Option not found")]
    OptionNotFound,
}

pub type Result<T> = std::result::Result<T, PollError>;
