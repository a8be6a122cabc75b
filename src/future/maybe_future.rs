//! Asynchronous operators for futures resolving to a [`Maybe`].

use std::future::Future;

use crate::fault::Fault;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Composition operators for any future resolving to a [`Maybe<T>`].
///
/// Blanket-implemented. As with the synchronous maybe algebra, no
/// operator here captures closure errors; the absent state carries no
/// fault.
///
/// # Examples
///
/// ```rust
/// use railway::future::MaybeFuture;
/// use railway::maybe::Maybe;
///
/// futures::executor::block_on(async {
///     let length = async { Maybe::present("hello") }
///         .map(|s| s.len())
///         .unwrap_or(0)
///         .await;
///     assert_eq!(length, 5);
/// });
/// ```
pub trait MaybeFuture<T>: Future<Output = Maybe<T>> + Sized {
    /// Awaits the maybe, then applies a function to the value.
    fn map<U, F>(self, transform: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(transform) }
    }

    /// Awaits the maybe, then applies an asynchronous function to the
    /// value, awaiting its result.
    fn map_async<U, F, Fut>(self, transform: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match self.await {
                Maybe::Present(value) => Maybe::Present(transform(value).await),
                Maybe::Empty => Maybe::Empty,
            }
        }
    }

    /// Awaits the maybe, then applies a function that may decline to
    /// produce a value; `None` yields the empty maybe.
    fn filter_map<U, F>(self, transform: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Option<U>,
    {
        async move { self.await.filter_map(transform) }
    }

    /// Awaits the maybe, then chains a function that itself returns a
    /// maybe.
    fn flat_map<U, F>(self, bind: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        async move { self.await.flat_map(bind) }
    }

    /// Awaits the maybe, then chains an asynchronous function returning
    /// the next maybe, awaiting it.
    fn flat_map_async<U, F, Fut>(self, bind: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        async move {
            match self.await {
                Maybe::Present(value) => bind(value).await,
                Maybe::Empty => Maybe::Empty,
            }
        }
    }

    /// Awaits the maybe, then keeps the value only when the predicate
    /// accepts it.
    fn filter<P>(self, predicate: P) -> impl Future<Output = Maybe<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        async move { self.await.filter(predicate) }
    }

    /// Awaits the maybe, then eliminates it by applying exactly one of
    /// two functions.
    fn fold<R, P, E>(self, on_value: P, on_empty: E) -> impl Future<Output = R>
    where
        P: FnOnce(T) -> R,
        E: FnOnce() -> R,
    {
        async move { self.await.fold(on_value, on_empty) }
    }

    /// Awaits the maybe, then eliminates it by applying and awaiting
    /// exactly one of two asynchronous projections.
    fn fold_async<R, P, E, PFut, EFut>(self, on_value: P, on_empty: E) -> impl Future<Output = R>
    where
        P: FnOnce(T) -> PFut,
        PFut: Future<Output = R>,
        E: FnOnce() -> EFut,
        EFut: Future<Output = R>,
    {
        async move {
            match self.await {
                Maybe::Present(value) => on_value(value).await,
                Maybe::Empty => on_empty().await,
            }
        }
    }

    /// Awaits the maybe, then invokes exactly one of two side-effecting
    /// callbacks.
    fn branch<P, E>(self, on_value: P, on_empty: E) -> impl Future<Output = ()>
    where
        P: FnOnce(&T),
        E: FnOnce(),
    {
        async move { self.await.branch(on_value, on_empty) }
    }

    /// Awaits the maybe, then returns the value or the given default.
    fn unwrap_or(self, default: T) -> impl Future<Output = T> {
        async move { self.await.unwrap_or(default) }
    }

    /// Awaits the maybe, then returns the value or invokes the factory
    /// for a default.
    fn unwrap_or_else<F>(self, factory: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> T,
    {
        async move { self.await.unwrap_or_else(factory) }
    }

    /// Awaits the maybe, then converts it into an outcome, failing with
    /// the given fault when empty.
    fn into_outcome<E>(self, fault: E) -> impl Future<Output = Outcome<T>>
    where
        E: Into<Fault>,
    {
        async move { self.await.into_outcome(fault) }
    }

    /// Awaits the maybe, then converts it into an outcome, building the
    /// fault lazily.
    fn into_outcome_with<F>(self, fault_with: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce() -> Fault,
    {
        async move { self.await.into_outcome_with(fault_with) }
    }
}

impl<Fut, T> MaybeFuture<T> for Fut where Fut: Future<Output = Maybe<T>> {}

// =============================================================================
// Asynchronous continuations on a resolved maybe
// =============================================================================

impl<T> Maybe<T> {
    /// Applies an asynchronous function to the value, awaiting its
    /// result.
    ///
    /// The pending-continuation counterpart of [`Maybe::map`]; an empty
    /// maybe stays empty and the continuation is never invoked.
    pub async fn map_async<U, F, Fut>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Present(value) => Maybe::Present(transform(value).await),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Chains an asynchronous function returning the next maybe,
    /// awaiting it.
    pub async fn flat_map_async<U, F, Fut>(self, bind: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Self::Present(value) => bind(value).await,
            Self::Empty => Maybe::Empty,
        }
    }

    /// Eliminates the maybe by applying and awaiting exactly one of two
    /// asynchronous projections.
    pub async fn fold_async<R, P, E, PFut, EFut>(self, on_value: P, on_empty: E) -> R
    where
        P: FnOnce(T) -> PFut,
        PFut: Future<Output = R>,
        E: FnOnce() -> EFut,
        EFut: Future<Output = R>,
    {
        match self {
            Self::Present(value) => on_value(value).await,
            Self::Empty => on_empty().await,
        }
    }
}
