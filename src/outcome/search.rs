// src/outcome/search.rs
use super::Outcome;
use crate::contract::ContractResult;
use crate::error::{BoxedDomainError, DomainError, ErrorList};
use std::future::Future;

/// Result of a search over many items, as opposed to a lookup of a single
/// item by its id. Structurally the two-variant shape with search
/// vocabulary: a thin wrapper that delegates its combinators to
/// [`Outcome`] instead of duplicating them.
#[derive(Debug)]
pub enum SearchOutcome<P> {
    Ok(P),
    BadRequest(ErrorList),
}

impl<P> SearchOutcome<P> {
    pub fn ok(value: P) -> Self {
        Self::Ok(value)
    }

    pub fn bad_request(error: impl DomainError) -> Self {
        Self::BadRequest(ErrorList::single(error))
    }

    /// Builds a bad-request outcome from a sequence of errors, rejecting an
    /// empty sequence.
    pub fn bad_requests(errors: Vec<BoxedDomainError>) -> ContractResult<Self> {
        Ok(Self::BadRequest(ErrorList::new(errors)?))
    }

    fn into_general(self) -> Outcome<P> {
        match self {
            Self::Ok(value) => Outcome::Success(value),
            Self::BadRequest(errors) => Outcome::Error(errors),
        }
    }

    fn from_general(outcome: Outcome<P>) -> Self {
        outcome.match_with(Self::Ok, Self::BadRequest)
    }

    /// Total eliminator: exactly one handler runs, selected by the variant.
    pub fn match_with<Q>(
        self,
        on_ok: impl FnOnce(P) -> Q,
        on_bad_request: impl FnOnce(ErrorList) -> Q,
    ) -> Q {
        self.into_general().match_with(on_ok, on_bad_request)
    }

    /// Applies `f` to the ok payload; a bad-request outcome is carried over
    /// unchanged, only re-typed.
    pub fn then<Q>(self, f: impl FnOnce(P) -> Q) -> SearchOutcome<Q> {
        SearchOutcome::from_general(self.into_general().then(f))
    }

    /// Runs `f` against the ok payload for its effect and keeps the outcome
    /// intact. Skipped on a bad request.
    pub fn inspect(self, f: impl FnOnce(&P)) -> Self {
        Self::from_general(self.into_general().inspect(f))
    }

    /// Runs `f` for its effect when the outcome is ok, without looking at
    /// the payload. Skipped on a bad request.
    pub fn tap(self, f: impl FnOnce()) -> Self {
        Self::from_general(self.into_general().tap(f))
    }

    /// Awaits the transform only on an ok outcome; a bad request resolves
    /// immediately without invoking it.
    pub async fn then_async<Q, Fut>(self, f: impl FnOnce(P) -> Fut) -> SearchOutcome<Q>
    where
        Fut: Future<Output = Q>,
    {
        SearchOutcome::from_general(self.into_general().then_async(f).await)
    }

    /// Awaits the side effect only on an ok outcome, then resolves to the
    /// original outcome.
    pub async fn inspect_async<Fut>(self, f: impl FnOnce(&P) -> Fut) -> Self
    where
        Fut: Future<Output = ()>,
    {
        Self::from_general(self.into_general().inspect_async(f).await)
    }

    /// Awaits `source`, then chains the asynchronous transform.
    pub async fn await_then_async<Q, Fut>(
        source: impl Future<Output = Self>,
        f: impl FnOnce(P) -> Fut,
    ) -> SearchOutcome<Q>
    where
        Fut: Future<Output = Q>,
    {
        source.await.then_async(f).await
    }

    /// Awaits `source`, then applies the synchronous transform.
    pub async fn await_then<Q>(
        source: impl Future<Output = Self>,
        f: impl FnOnce(P) -> Q,
    ) -> SearchOutcome<Q> {
        source.await.then(f)
    }

    /// Awaits `source`, then eliminates it with `match_with`.
    pub async fn await_match<Q>(
        source: impl Future<Output = Self>,
        on_ok: impl FnOnce(P) -> Q,
        on_bad_request: impl FnOnce(ErrorList) -> Q,
    ) -> Q {
        source.await.match_with(on_ok, on_bad_request)
    }
}
