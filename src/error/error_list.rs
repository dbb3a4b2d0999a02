// src/error/error_list.rs
use super::{BoxedDomainError, DomainError, has_error_kind};
use crate::contract::{ContractResult, ContractViolation};

/// Ordered, non-empty sequence of domain errors carried by a failed outcome.
///
/// This is the one place the error-sequence invariant is enforced: every
/// `Error` and `BadRequest` variant in the crate holds an `ErrorList`, so no
/// outcome can ever carry zero errors. Insertion order is preserved through
/// all transformations and duplicates are permitted.
#[derive(Debug)]
pub struct ErrorList {
    errors: Vec<BoxedDomainError>,
}

impl ErrorList {
    /// Validates and wraps an error sequence.
    ///
    /// Rejects an empty sequence with [`ContractViolation::InvalidValue`]:
    /// an error variant without errors would be indistinguishable from
    /// success for its consumer.
    pub fn new(errors: Vec<BoxedDomainError>) -> ContractResult<Self> {
        if errors.is_empty() {
            tracing::debug!("rejected error list: empty sequence");
            return Err(ContractViolation::InvalidValue(
                "errors must contain at least one element",
            ));
        }
        Ok(Self { errors })
    }

    /// Validates an error sequence that may itself be absent.
    ///
    /// `None` fails with [`ContractViolation::MissingValue`], a distinct
    /// kind from the empty-sequence rejection in [`ErrorList::new`].
    pub fn from_optional(errors: Option<Vec<BoxedDomainError>>) -> ContractResult<Self> {
        match errors {
            Some(errors) => Self::new(errors),
            None => {
                tracing::debug!("rejected error list: absent sequence");
                Err(ContractViolation::MissingValue("errors"))
            }
        }
    }

    /// Wraps a single error as a one-element list.
    pub fn single(error: impl DomainError) -> Self {
        Self {
            errors: vec![Box::new(error)],
        }
    }

    /// True iff at least one element is of kind `K`.
    pub fn has<K: DomainError>(&self) -> bool {
        has_error_kind::<K>(&self.errors)
    }

    pub fn as_slice(&self) -> &[BoxedDomainError] {
        &self.errors
    }

    pub fn count(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BoxedDomainError> {
        self.errors.iter()
    }

    pub fn into_vec(self) -> Vec<BoxedDomainError> {
        self.errors
    }
}

impl IntoIterator for ErrorList {
    type Item = BoxedDomainError;
    type IntoIter = std::vec::IntoIter<BoxedDomainError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a BoxedDomainError;
    type IntoIter = std::slice::Iter<'a, BoxedDomainError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
