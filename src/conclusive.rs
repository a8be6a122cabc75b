//! Conclusive - the capability shared by both outcome types.
//!
//! This module provides the [`Conclusive`] trait, implemented by
//! [`Outcome<T>`](crate::outcome::Outcome) and
//! [`Completion`](crate::completion::Completion). It lets callers that do
//! not know which outcome type they hold still branch on success or
//! failure, read the fault, and obtain a type-erased view of the value.
//!
//! The typed value accessor stays on the concrete types; the trait owns
//! only the erased [`Any`] accessor, so `&dyn Conclusive` remains
//! object-safe.
//!
//! # Examples
//!
//! ```rust
//! use railway::conclusive::Conclusive;
//! use railway::completion::Completion;
//! use railway::outcome::Outcome;
//!
//! let outcomes: Vec<Box<dyn Conclusive>> = vec![
//!     Box::new(Outcome::succeed(42)),
//!     Box::new(Completion::fail("boom")),
//! ];
//!
//! assert!(outcomes[0].is_success());
//! assert!(outcomes[1].is_failure());
//!
//! let value = outcomes[0].erased_value().unwrap();
//! assert_eq!(value.downcast_ref::<i32>(), Some(&42));
//! ```

use std::any::Any;

use crate::completion::Completion;
use crate::fault::Fault;
use crate::outcome::Outcome;

#[cfg(feature = "async")]
use futures::future::BoxFuture;

/// A success-or-failure value whose payload type has been erased.
///
/// Implemented by both outcome types. The generic implementation requires
/// `T: Any` (i.e. `'static`) so that the value can be offered through the
/// erased accessor.
pub trait Conclusive {
    /// Returns `true` if this is a success.
    fn is_success(&self) -> bool;

    /// Returns `true` if this is a failure.
    #[inline]
    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the fault if this is a failure.
    fn fault(&self) -> Option<&Fault>;

    /// Returns a type-erased view of the success value.
    ///
    /// `None` for failures and for success values with no payload (the
    /// value-less [`Completion`]). The caller can downcast with
    /// [`Any::downcast_ref`].
    fn erased_value(&self) -> Option<&dyn Any>;

    /// Invokes exactly one of two callbacks with the erased state.
    ///
    /// The success callback receives the erased value, which is `None`
    /// for payload-free outcomes.
    #[inline]
    fn branch_erased(
        &self,
        on_success: &mut dyn FnMut(Option<&dyn Any>),
        on_failure: &mut dyn FnMut(&Fault),
    ) {
        match self.fault() {
            Some(fault) => on_failure(fault),
            None => on_success(self.erased_value()),
        }
    }

    /// Invokes exactly one of two asynchronous callbacks with the erased
    /// state, returning the branch's future.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::conclusive::Conclusive;
    /// use railway::outcome::Outcome;
    ///
    /// futures::executor::block_on(async {
    ///     let outcome: Box<dyn Conclusive> = Box::new(Outcome::succeed(42));
    ///     let mut seen = None;
    ///     outcome
    ///         .branch_erased_async(
    ///             Box::new(|value| {
    ///                 seen = value.and_then(|v| v.downcast_ref::<i32>()).copied();
    ///                 Box::pin(async {})
    ///             }),
    ///             Box::new(|_| Box::pin(async {})),
    ///         )
    ///         .await;
    ///     assert_eq!(seen, Some(42));
    /// });
    /// ```
    #[cfg(feature = "async")]
    #[inline]
    fn branch_erased_async<'a>(
        &'a self,
        on_success: Box<dyn FnOnce(Option<&'a dyn Any>) -> BoxFuture<'a, ()> + 'a>,
        on_failure: Box<dyn FnOnce(&'a Fault) -> BoxFuture<'a, ()> + 'a>,
    ) -> BoxFuture<'a, ()> {
        match self.fault() {
            Some(fault) => on_failure(fault),
            None => on_success(self.erased_value()),
        }
    }
}

impl<T: Any> Conclusive for Outcome<T> {
    #[inline]
    fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    #[inline]
    fn fault(&self) -> Option<&Fault> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(fault) => Some(fault),
        }
    }

    #[inline]
    fn erased_value(&self) -> Option<&dyn Any> {
        self.value().map(|value| value as &dyn Any)
    }
}

impl Conclusive for Completion {
    #[inline]
    fn is_success(&self) -> bool {
        matches!(self, Completion::Success)
    }

    #[inline]
    fn fault(&self) -> Option<&Fault> {
        match self {
            Completion::Success => None,
            Completion::Failure(fault) => Some(fault),
        }
    }

    /// A completion never carries a payload.
    #[inline]
    fn erased_value(&self) -> Option<&dyn Any> {
        None
    }
}
