use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("State not registered: {name}")]
    StateNotFound { name: &'static str },
    #[error("Compute not registered: {name}")]
    ComputeNotFound { name: &'static str },
}
