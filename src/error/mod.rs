// src/error/mod.rs
mod error_list;

pub use error_list::ErrorList;

use std::any::Any;
use std::fmt;

/// An anticipated domain failure. Deliberately not a panic and not a
/// transport fault: a `DomainError` is plain data, created by the producer
/// of an outcome and carried inside its error variant until a match
/// consumes it. Concrete failure kinds are types implementing this trait;
/// identity is the runtime type.
pub trait DomainError: Any + fmt::Debug + Send + Sync {}

pub type BoxedDomainError = Box<dyn DomainError>;

/// Returns true iff at least one element of `errors` is of kind `K`.
///
/// An empty slice simply yields false; emptiness is only rejected when an
/// error variant is being constructed, not when a sequence is inspected.
pub fn has_error_kind<K: DomainError>(errors: &[BoxedDomainError]) -> bool {
    errors.iter().any(|error| {
        let error: &dyn Any = &**error;
        error.is::<K>()
    })
}
