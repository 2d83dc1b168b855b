//! Equality predicates used by the law checks.
//!
//! Effects such as `IO` or `ReaderT` cannot implement `PartialEq`: two values
//! are only comparable after running them. An [`Equivalence`] packages the
//! comparison so that every law can be stated once for all effects.

use std::fmt;
use std::rc::Rc;

/// A shareable equivalence relation on `T`.
///
/// # Examples
///
/// ```rust
/// use kindred::laws::Equivalence;
///
/// let by_length = Equivalence::<usize>::structural().contramap(|text: &String| text.len());
/// assert!(by_length.equals(&"abc".to_string(), &"xyz".to_string()));
/// assert!(!by_length.equals(&"a".to_string(), &"xyz".to_string()));
/// ```
pub struct Equivalence<T> {
    equals: Rc<dyn Fn(&T, &T) -> bool>,
}

impl<T: 'static> Equivalence<T> {
    /// Builds an equivalence from a comparison function.
    ///
    /// The function must be reflexive, symmetric and transitive for the law
    /// checks to be meaningful.
    pub fn from_equals<F>(equals: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        Self {
            equals: Rc::new(equals),
        }
    }

    /// Equality through [`PartialEq`].
    pub fn structural() -> Self
    where
        T: PartialEq,
    {
        Self::from_equals(|left: &T, right: &T| left == right)
    }

    /// Returns whether `left` and `right` are equivalent.
    #[inline]
    pub fn equals(&self, left: &T, right: &T) -> bool {
        (self.equals)(left, right)
    }

    /// Compares values of `U` by projecting them to `T` first.
    #[must_use]
    pub fn contramap<U, P>(self, projection: P) -> Equivalence<U>
    where
        U: 'static,
        P: Fn(&U) -> T + 'static,
    {
        Equivalence::from_equals(move |left: &U, right: &U| {
            self.equals(&projection(left), &projection(right))
        })
    }
}

impl<T> Clone for Equivalence<T> {
    fn clone(&self) -> Self {
        Self {
            equals: Rc::clone(&self.equals),
        }
    }
}

impl<T> fmt::Debug for Equivalence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Equivalence<{}>", std::any::type_name::<T>())
    }
}
