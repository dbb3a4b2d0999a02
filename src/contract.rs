// src/contract.rs
use thiserror::Error;

pub type ContractResult<T> = Result<T, ContractViolation>;

/// A broken caller contract. This is a programmer error surfaced at the
/// violating call, never data carried inside an outcome: anticipated
/// failures travel as [`DomainError`](crate::error::DomainError) values
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// A required argument was absent.
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    /// An argument was present but structurally invalid.
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}
