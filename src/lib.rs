// src/lib.rs
//! Closed outcome types for domain operations.
//!
//! A domain operation finishes in one of a small, closed set of shapes:
//! it succeeds with a payload, fails with one or more domain errors, or,
//! when it addresses a single item by id, finds nothing. Each shape is a
//! public enum with short-circuiting combinators, so call sites chain
//! validation, persistence, and projection without touching the failure
//! paths.
//!
//! Two failure vocabularies are kept apart on purpose. [`DomainError`]
//! values are anticipated outcomes carried as data inside an error
//! variant. [`ContractViolation`] marks a caller bug, such as building an
//! error variant with no errors in it, and is reported through an
//! ordinary `Result` at construction time.

pub mod contract;
pub mod error;
pub mod outcome;

pub use contract::{ContractResult, ContractViolation};
pub use error::{BoxedDomainError, DomainError, ErrorList, has_error_kind};
pub use outcome::{
    AddOutcome, LookupOutcome, Outcome, RemoveOutcome, SearchOutcome, UpdateOutcome,
};
