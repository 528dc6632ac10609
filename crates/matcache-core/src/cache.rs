//! Matrix inverse cache
//!
//! An [`InverseCache`] owns a subject matrix and at most one cached inverse.
//! The cached slot has two states:
//!
//! - **Absent**: initial state, re-entered on every [`InverseCache::set_subject`]
//! - **Present**: entered by [`InverseCache::set_inverse`], whether called
//!   directly or by the solver
//!
//! Replacing the subject always clears the slot, even when the new matrix
//! equals the old one, so a cached inverse never outlives the subject it was
//! computed for. A caller-supplied inverse is trusted as-is.

use ndarray::Array2;
use tracing::trace;

/// Holds a matrix and its lazily computed inverse
#[derive(Debug, Clone, PartialEq)]
pub struct InverseCache<T = f64> {
    subject: Array2<T>,
    inverse: Option<Array2<T>>,
}

impl<T> InverseCache<T> {
    /// Creates a cache for `subject` with no inverse stored
    pub fn new(subject: Array2<T>) -> Self {
        Self {
            subject,
            inverse: None,
        }
    }

    /// Replaces the subject and clears the cached inverse
    pub fn set_subject(&mut self, subject: Array2<T>) {
        trace!(
            "Replacing {:?} subject with {:?}, clearing cached inverse",
            self.subject.dim(),
            subject.dim()
        );
        self.subject = subject;
        self.inverse = None;
    }

    /// Current subject matrix
    pub fn subject(&self) -> &Array2<T> {
        &self.subject
    }

    /// Stores `inverse` without checking it against the subject
    pub fn set_inverse(&mut self, inverse: Array2<T>) {
        self.inverse = Some(inverse);
    }

    /// Cached inverse, or `None` if nothing has been stored since the last subject change
    pub fn inverse(&self) -> Option<&Array2<T>> {
        self.inverse.as_ref()
    }

    /// Whether an inverse is currently cached
    pub fn is_cached(&self) -> bool {
        self.inverse.is_some()
    }

    /// Consumes the cache, returning the subject
    pub fn into_subject(self) -> Array2<T> {
        self.subject
    }

    /// Split borrow used by the solver to fill the slot without a second lookup
    pub(crate) fn slot_mut(&mut self) -> (&Array2<T>, &mut Option<Array2<T>>) {
        (&self.subject, &mut self.inverse)
    }
}

impl<T: Default> Default for InverseCache<T> {
    fn default() -> Self {
        Self::new(Array2::default((0, 0)))
    }
}

impl<T> From<Array2<T>> for InverseCache<T> {
    fn from(subject: Array2<T>) -> Self {
        Self::new(subject)
    }
}
