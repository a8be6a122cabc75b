//! # railway
//!
//! Railway-oriented programming for Rust: outcome and maybe value types
//! with synchronous and asynchronous composition.
//!
//! ## Overview
//!
//! This library provides two immutable monadic wrapper types and the
//! operator algebra to build pipelines over them:
//!
//! - [`Outcome<T>`](outcome::Outcome): success-with-value or failure-with-[`Fault`](fault::Fault)
//! - [`Completion`](completion::Completion): success or failure, no value
//! - [`Maybe<T>`](maybe::Maybe): present or absent
//! - **Composition operators**: `map`, `flat_map`, `filter`, `ensure`,
//!   `fold`, `branch`, `on_success`, `on_failure`, `inspect` and their
//!   `try_`-prefixed capturing forms
//! - **Asynchronous extension layer**: the same algebra over any
//!   [`Future`](std::future::Future) resolving to a wrapper type
//! - **Pagination carriers**: offset, cursor and slice result records
//!   with structure-preserving item transforms
//!
//! Every chaining operator short-circuits on failure without invoking the
//! caller-supplied function, preserving the original fault unchanged.
//!
//! ## Feature Flags
//!
//! - `paging`: pagination carrier types
//! - `async`: asynchronous extension traits over `std::future::Future`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use railway::prelude::*;
//!
//! let outcome = Outcome::succeed(5)
//!     .map(|x| x * 2)
//!     .filter(|x| *x > 0, "must be positive")
//!     .flat_map(|x| Outcome::succeed(x + 1));
//! assert_eq!(outcome, Outcome::succeed(11));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use railway::prelude::*;
/// ```
pub mod prelude {

    pub use crate::completion::Completion;
    pub use crate::conclusive::Conclusive;
    pub use crate::fault::Fault;
    pub use crate::maybe::Maybe;
    pub use crate::outcome::Outcome;

    #[cfg(feature = "async")]
    pub use crate::future::{CompletionFuture, MaybeFuture, OutcomeFuture};

    #[cfg(feature = "paging")]
    pub use crate::paging::{CursorPaged, Paged, Sliced};
}

pub mod completion;
pub mod conclusive;
pub mod fault;
pub mod maybe;
pub mod outcome;

#[cfg(feature = "async")]
pub mod future;

#[cfg(feature = "paging")]
pub mod paging;
