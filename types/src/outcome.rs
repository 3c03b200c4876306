//! Captured result of a single fallible computation.
//!
//! [`Outcome::from_fn`] is the only way to build an [`Outcome`] from a computation.
//! It is a recovery boundary: whatever the computation raises, an `Err` return or a
//! panic, comes back as [`Outcome::Error`] and never escapes `from_fn`.

use std::any::Any;
use std::error::Error as StdError;
use std::iter::FusedIterator;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

const PANIC_WITHOUT_MESSAGE: &str = "computation panicked";

/// Message and cause chain of a failed computation.
///
/// `source()` walks the same chain as [`Failure::cause`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Failure {
    message: String,
    #[source]
    cause: Option<Box<Failure>>,
}

impl Failure {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    #[must_use]
    pub fn with_cause(message: impl Into<String>, cause: Failure) -> Self {
        Self {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Snapshot an error and its whole `source()` chain.
    #[must_use]
    pub fn from_error(error: &(dyn StdError + 'static)) -> Self {
        Self {
            message: error.to_string(),
            cause: error.source().map(|source| Box::new(Self::from_error(source))),
        }
    }

    fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            PANIC_WITHOUT_MESSAGE.to_string()
        };
        Self::new(message)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn cause(&self) -> Option<&Failure> {
        self.cause.as_deref()
    }

    /// This failure followed by each of its causes, outermost first.
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }
}

/// Iterator returned by [`Failure::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Failure>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Failure;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Either the value a computation returned or the failure it raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Ok(T),
    Error(Failure),
}

impl<T> Outcome<T> {
    /// Run `computation` on the calling thread and capture how it ended.
    ///
    /// An `Err` becomes [`Outcome::Error`] with its message and source chain. A panic
    /// is caught and becomes [`Outcome::Error`] carrying the panic message. The panic
    /// hook still runs, so the default hook prints the panic to stderr.
    pub fn from_fn<F, E>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        // The error's Display and source() run inside the boundary too.
        let captured = panic::catch_unwind(AssertUnwindSafe(|| match computation() {
            Ok(value) => Self::Ok(value),
            Err(err) => {
                let err: BoxError = err.into();
                Self::Error(Failure::from_error(err.as_ref()))
            }
        }));
        captured.unwrap_or_else(|payload| Self::Error(Failure::from_panic(payload.as_ref())))
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    #[must_use]
    pub const fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Ok(_) => None,
            Self::Error(failure) => Some(failure),
        }
    }

    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Error(failure) => Err(failure),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
