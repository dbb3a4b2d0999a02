// src/outcome/mod.rs
//! Closed outcome types for domain operations.
//!
//! Each shape is a public enum, so callers may either pattern-match
//! exhaustively or use the handler-per-variant eliminator `match_with`.
//! Every combinator consumes the outcome and returns a new one; nothing is
//! mutated in place. `then` and its async counterparts transform only the
//! success payload and carry every other variant through unchanged.

mod lookup;
mod search;

pub use lookup::LookupOutcome;
pub use search::SearchOutcome;

use crate::contract::ContractResult;
use crate::error::{BoxedDomainError, DomainError, ErrorList};
use std::future::Future;

/// Result of a domain command that either succeeds with a value or fails
/// with one or more domain errors.
#[derive(Debug)]
pub enum Outcome<P> {
    Success(P),
    Error(ErrorList),
}

/// Outcome of adding an item to a collection.
pub type AddOutcome<P> = Outcome<P>;

/// Outcome of removing an item addressed by its id.
pub type RemoveOutcome<P> = LookupOutcome<P>;

/// Outcome of updating an item addressed by its id.
pub type UpdateOutcome<P> = LookupOutcome<P>;

impl<P> Outcome<P> {
    pub fn success(value: P) -> Self {
        Self::Success(value)
    }

    pub fn error(error: impl DomainError) -> Self {
        Self::Error(ErrorList::single(error))
    }

    /// Builds an error outcome from a sequence of errors, rejecting an
    /// empty sequence.
    pub fn errors(errors: Vec<BoxedDomainError>) -> ContractResult<Self> {
        Ok(Self::Error(ErrorList::new(errors)?))
    }

    /// Total eliminator: exactly one handler runs, selected by the variant.
    pub fn match_with<Q>(
        self,
        on_success: impl FnOnce(P) -> Q,
        on_error: impl FnOnce(ErrorList) -> Q,
    ) -> Q {
        match self {
            Self::Success(value) => on_success(value),
            Self::Error(errors) => on_error(errors),
        }
    }

    /// Applies `f` to the success payload; an error outcome is carried over
    /// unchanged, only re-typed.
    pub fn then<Q>(self, f: impl FnOnce(P) -> Q) -> Outcome<Q> {
        self.match_with(|value| Outcome::Success(f(value)), Outcome::Error)
    }

    /// Runs `f` against the success payload for its effect and keeps the
    /// outcome intact. Skipped entirely on an error outcome.
    pub fn inspect(self, f: impl FnOnce(&P)) -> Self {
        self.then(|value| {
            f(&value);
            value
        })
    }

    /// Runs `f` for its effect when the outcome is a success, without
    /// looking at the payload. Skipped entirely on an error outcome.
    pub fn tap(self, f: impl FnOnce()) -> Self {
        self.then(|value| {
            f();
            value
        })
    }

    /// Awaits the transform only on success; an error outcome resolves
    /// immediately without invoking it.
    pub async fn then_async<Q, Fut>(self, f: impl FnOnce(P) -> Fut) -> Outcome<Q>
    where
        Fut: Future<Output = Q>,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value).await),
            Self::Error(errors) => {
                tracing::trace!("async chain short-circuited on error outcome");
                Outcome::Error(errors)
            }
        }
    }

    /// Awaits the side effect only on success, then resolves to the
    /// original outcome.
    pub async fn inspect_async<Fut>(self, f: impl FnOnce(&P) -> Fut) -> Self
    where
        Fut: Future<Output = ()>,
    {
        if let Self::Success(value) = &self {
            f(value).await;
        }
        self
    }

    /// Awaits `source`, then chains the asynchronous transform.
    pub async fn await_then_async<Q, Fut>(
        source: impl Future<Output = Self>,
        f: impl FnOnce(P) -> Fut,
    ) -> Outcome<Q>
    where
        Fut: Future<Output = Q>,
    {
        source.await.then_async(f).await
    }

    /// Awaits `source`, then applies the synchronous transform.
    pub async fn await_then<Q>(
        source: impl Future<Output = Self>,
        f: impl FnOnce(P) -> Q,
    ) -> Outcome<Q> {
        source.await.then(f)
    }

    /// Awaits `source`, then eliminates it with `match_with`.
    pub async fn await_match<Q>(
        source: impl Future<Output = Self>,
        on_success: impl FnOnce(P) -> Q,
        on_error: impl FnOnce(ErrorList) -> Q,
    ) -> Q {
        source.await.match_with(on_success, on_error)
    }
}
