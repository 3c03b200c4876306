//! Value types for explicit absence and explicit failure.
//!
//! This crate contains pure value types with no IO, no async, and no logging:
//!
//! - [`Optional`]: zero or one value, with the `filter`/`map`/`flat_map`/`or` combinators
//!   and the `or_else*` terminal family.
//! - [`Outcome`]: the value a computation returned, or the [`Failure`] it raised.
//!
//! ```
//! use optio_types::{Optional, Outcome};
//!
//! let length = Optional::present("Hello").filter(|s| !s.is_empty()).map(str::len);
//! assert_eq!(length.get_or_else(0), 5);
//!
//! let parsed: Outcome<u32> = Outcome::from_fn(|| "42".parse::<u32>());
//! assert_eq!(parsed.value(), Some(&42));
//! ```
//!
//! The sentinel can't be smuggled into `Present`; a `T` is never `None`:
//!
//! ```compile_fail
//! use optio_types::Optional;
//!
//! let _: Optional<i32> = Optional::present(None);
//! ```
//!
//! Equality is scoped to the element type:
//!
//! ```compile_fail
//! use optio_types::Optional;
//!
//! let strings: Optional<String> = Optional::empty();
//! let numbers: Optional<i32> = Optional::empty();
//! assert!(strings == numbers);
//! ```
//!
//! That holds even when the payloads themselves compare:
//!
//! ```compile_fail
//! use optio_types::Optional;
//!
//! let owned: Optional<String> = Optional::empty();
//! let borrowed: Optional<&str> = Optional::empty();
//! assert!(owned == borrowed);
//! ```

mod optional;
mod outcome;

#[cfg(test)]
mod laws;

pub use optional::{IntoIter, Iter, Optional, OptionalError};
pub use outcome::{Chain, Failure, Outcome};

// Send + Sync whenever the payload is.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Optional<String>>();
    assert_send_sync::<Outcome<String>>();
    assert_send_sync::<Failure>();
};
