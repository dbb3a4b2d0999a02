// src/outcome/lookup.rs
use crate::contract::ContractResult;
use crate::error::{BoxedDomainError, DomainError, ErrorList};
use std::future::Future;

/// Result of an operation addressing a single item by its id, where the
/// item may not exist: remove and update belong to this shape.
#[derive(Debug)]
pub enum LookupOutcome<P> {
    Success(P),
    NotFound,
    Error(ErrorList),
}

impl<P> LookupOutcome<P> {
    pub fn success(value: P) -> Self {
        Self::Success(value)
    }

    pub fn not_found() -> Self {
        Self::NotFound
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
    /// Handlers are taken in variant-declaration order.
    pub fn match_with<Q>(
        self,
        on_success: impl FnOnce(P) -> Q,
        on_not_found: impl FnOnce() -> Q,
        on_error: impl FnOnce(ErrorList) -> Q,
    ) -> Q {
        match self {
            Self::Success(value) => on_success(value),
            Self::NotFound => on_not_found(),
            Self::Error(errors) => on_error(errors),
        }
    }

    /// Applies `f` to the success payload; not-found and error outcomes are
    /// carried over unchanged, only re-typed.
    pub fn then<Q>(self, f: impl FnOnce(P) -> Q) -> LookupOutcome<Q> {
        self.match_with(
            |value| LookupOutcome::Success(f(value)),
            || LookupOutcome::NotFound,
            LookupOutcome::Error,
        )
    }

    /// Runs `f` against the success payload for its effect and keeps the
    /// outcome intact. Skipped on every other variant.
    pub fn inspect(self, f: impl FnOnce(&P)) -> Self {
        self.then(|value| {
            f(&value);
            value
        })
    }

    /// Runs `f` for its effect when the outcome is a success, without
    /// looking at the payload. Skipped on every other variant.
    pub fn tap(self, f: impl FnOnce()) -> Self {
        self.then(|value| {
            f();
            value
        })
    }

    /// Awaits the transform only on success; not-found and error outcomes
    /// resolve immediately without invoking it.
    pub async fn then_async<Q, Fut>(self, f: impl FnOnce(P) -> Fut) -> LookupOutcome<Q>
    where
        Fut: Future<Output = Q>,
    {
        match self {
            Self::Success(value) => LookupOutcome::Success(f(value).await),
            Self::NotFound => LookupOutcome::NotFound,
            Self::Error(errors) => {
                tracing::trace!("async chain short-circuited on error outcome");
                LookupOutcome::Error(errors)
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
    ) -> LookupOutcome<Q>
    where
        Fut: Future<Output = Q>,
    {
        source.await.then_async(f).await
    }

    /// Awaits `source`, then applies the synchronous transform.
    pub async fn await_then<Q>(
        source: impl Future<Output = Self>,
        f: impl FnOnce(P) -> Q,
    ) -> LookupOutcome<Q> {
        source.await.then(f)
    }

    /// Awaits `source`, then eliminates it with `match_with`.
    pub async fn await_match<Q>(
        source: impl Future<Output = Self>,
        on_success: impl FnOnce(P) -> Q,
        on_not_found: impl FnOnce() -> Q,
        on_error: impl FnOnce(ErrorList) -> Q,
    ) -> Q {
        source.await.match_with(on_success, on_not_found, on_error)
    }
}
