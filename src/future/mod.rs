//! Asynchronous extension layer for the wrapper types.
//!
//! This module mirrors the synchronous composition algebra over
//! [`std::future::Future`]. Two shapes are covered for every operator:
//!
//! - **Pending receiver**: extension traits ([`OutcomeFuture`],
//!   [`CompletionFuture`], [`MaybeFuture`]) blanket-implemented for any
//!   future resolving to the matching wrapper type. Each method awaits
//!   the input, then delegates to the synchronous operator of the same
//!   name.
//! - **Pending continuation**: inherent `*_async` methods on the
//!   resolved wrapper types, awaiting a caller-supplied asynchronous
//!   continuation.
//!
//! Within a chain each step is awaited to completion before the next
//! begins; the library never spawns, blocks, or observes cancellation.
//! Failure-carrying continuation outputs (`Outcome`, `Result`) fold into
//! the outcome exactly like the synchronous `try_` forms; `fold_async`
//! mirrors synchronous `fold` and captures nothing.
//!
//! # Examples
//!
//! ```rust
//! use railway::future::OutcomeFuture;
//! use railway::outcome::Outcome;
//!
//! futures::executor::block_on(async {
//!     let outcome = async { Outcome::succeed(42) }
//!         .map(|x| x + 1)
//!         .flat_map_async(|x| async move { Outcome::succeed(format!("Value: {x}")) })
//!         .await;
//!     assert_eq!(outcome, Outcome::succeed("Value: 43".to_string()));
//! });
//! ```

mod completion_future;
mod maybe_future;
mod outcome_future;

pub use completion_future::CompletionFuture;
pub use maybe_future::MaybeFuture;
pub use outcome_future::OutcomeFuture;
