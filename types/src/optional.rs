//! Zero-or-one value container.
//!
//! [`Optional`] is a closed two-variant type: [`Optional::Empty`] carries nothing and
//! [`Optional::Present`] carries exactly one payload. The payload is a plain `T`, so
//! the absence sentinel (`Option::None`) can never be stored inside `Present`. The
//! sentinel only shows up at the nullable entry points ([`Optional::of`],
//! [`Optional::of_nullable`], [`Optional::map_nullable`], [`Optional::try_flat_map`],
//! [`Optional::try_or`]), and each of them checks it.
//!
//! # Invariants
//!
//! - Instances are never mutated; every combinator returns a new value
//! - Callbacks run synchronously, at most once, and only when the variant calls for it
//! - `Empty` is zero-sized; there is no shared singleton to manage

use std::iter::FusedIterator;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionalError {
    /// The sentinel was passed where a value is required.
    #[error("value must not be null")]
    NullArgument,
    /// A value was requested from `Empty`.
    #[error("no value present")]
    NotFound,
    /// A caller-supplied function returned the sentinel where an `Optional` was required.
    #[error("supplied function returned null instead of an Optional")]
    NullResult,
}

/// A container holding zero or one value.
///
/// # Equality
///
/// Equality is scoped to the element type. `Empty == Empty` always holds for a given
/// `T`, and `Present(a) == Present(b)` iff `a == b`. Comparing optionals declared over
/// different element types does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    Empty,
    Present(T),
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> Optional<T> {
    /// Checked constructor for a value coming from a nullable source.
    ///
    /// Fails with [`OptionalError::NullArgument`] when given `None`.
    pub fn of(value: Option<T>) -> Result<Self, OptionalError> {
        match value {
            Some(value) => Ok(Self::present(value)),
            None => Err(OptionalError::NullArgument),
        }
    }

    /// `None` becomes `Empty`, anything else becomes `Present`. Never fails.
    #[must_use]
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::present(value),
            None => Self::Empty,
        }
    }

    #[must_use]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrow the payload, so combinators can run without consuming `self`.
    #[must_use]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Empty => Optional::Empty,
        }
    }

    pub fn get(self) -> Result<T, OptionalError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => Err(OptionalError::NotFound),
        }
    }

    /// Return the payload, or `default` when empty. The default is evaluated by the caller.
    #[must_use]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => default,
        }
    }

    #[must_use]
    pub fn or_else(self, other: T) -> T {
        self.get_or_else(other)
    }

    /// Return the payload, or the supplier's result when empty.
    ///
    /// The supplier is only invoked for `Empty`, exactly once.
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Empty => supplier(),
        }
    }

    pub fn or_else_throw(self) -> Result<T, OptionalError> {
        self.get()
    }

    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = self {
            consumer(value);
        }
    }

    /// Like [`Optional::if_present`], for consumers that can fail.
    ///
    /// The consumer's error is returned as is.
    pub fn try_if_present<E, F>(&self, consumer: F) -> Result<(), E>
    where
        F: FnOnce(&T) -> Result<(), E>,
    {
        match self {
            Self::Present(value) => consumer(value),
            Self::Empty => Ok(()),
        }
    }

    /// Run exactly one of `consumer` (when present) or `fallback` (when empty).
    pub fn if_present_or_else<F, G>(&self, consumer: F, fallback: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match self {
            Self::Present(value) => consumer(value),
            Self::Empty => fallback(),
        }
    }

    /// Keep the payload only if `predicate` accepts it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Empty
                }
            }
            Self::Empty => Self::Empty,
        }
    }

    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::present(f(value)),
            Self::Empty => Optional::Empty,
        }
    }

    /// Map through a function that may return the sentinel.
    ///
    /// A `None` result collapses to `Empty`, so
    /// `present(v).map_nullable(f) == of_nullable(f(v))`.
    pub fn map_nullable<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Present(value) => Optional::of_nullable(f(value)),
            Self::Empty => Optional::Empty,
        }
    }

    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Flat-map through a function that may fail to produce an `Optional` at all.
    ///
    /// `Some(Optional::Empty)` is a valid result; `None` is a contract violation and
    /// fails with [`OptionalError::NullResult`].
    pub fn try_flat_map<U, F>(self, f: F) -> Result<Optional<U>, OptionalError>
    where
        F: FnOnce(T) -> Option<Optional<U>>,
    {
        match self {
            Self::Present(value) => f(value).ok_or(OptionalError::NullResult),
            Self::Empty => Ok(Optional::Empty),
        }
    }

    /// Return `self` when present, otherwise the optional produced by `supplier`.
    pub fn or<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Empty => supplier(),
        }
    }

    /// Like [`Optional::or`], for suppliers that may return the sentinel.
    pub fn try_or<F>(self, supplier: F) -> Result<Self, OptionalError>
    where
        F: FnOnce() -> Option<Self>,
    {
        match self {
            Self::Present(_) => Ok(self),
            Self::Empty => supplier().ok_or(OptionalError::NullResult),
        }
    }

    /// A lazy sequence of zero or one borrowed element.
    ///
    /// Every call returns a fresh iterator over the same payload.
    pub fn stream(&self) -> Iter<'_, T> {
        self.iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().into_option(),
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

/// Collects into `Present` only if every element is present.
impl<A, V> FromIterator<Optional<A>> for Optional<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Optional<A>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Optional::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

/// Borrowing iterator returned by [`Optional::iter`] and [`Optional::stream`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator for `Optional<T>`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
