//! Asynchronous operators for futures resolving to an [`Outcome`].

use std::future::Future;

use crate::completion::Completion;
use crate::fault::Fault;
use crate::outcome::Outcome;

/// Composition operators for any future resolving to an [`Outcome<T>`].
///
/// Blanket-implemented; bringing the trait into scope is enough to chain
/// on a pending outcome. Every method awaits the receiver first, then
/// applies the same branching rules as the synchronous operator of the
/// same name.
///
/// # Examples
///
/// ```rust
/// use railway::future::OutcomeFuture;
/// use railway::outcome::Outcome;
///
/// futures::executor::block_on(async {
///     let outcome = async { Outcome::succeed(5) }
///         .map(|x| x * 2)
///         .filter(|x| *x > 0, "must be positive")
///         .await;
///     assert_eq!(outcome, Outcome::succeed(10));
/// });
/// ```
pub trait OutcomeFuture<T>: Future<Output = Outcome<T>> + Sized {
    /// Awaits the outcome, then applies a function to the success value.
    fn map<U, F>(self, transform: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(transform) }
    }

    /// Awaits the outcome, then applies a fallible function to the
    /// success value, capturing its error into a failure.
    fn try_map<U, E, F>(self, transform: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<Fault>,
    {
        async move { self.await.try_map(transform) }
    }

    /// Awaits the outcome, then applies an asynchronous function to the
    /// success value, awaiting its result.
    ///
    /// A failure passes through unchanged and the continuation is never
    /// invoked.
    fn map_async<U, F, Fut>(self, transform: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => Outcome::Success(transform(value).await),
                Outcome::Failure(fault) => Outcome::Failure(fault),
            }
        }
    }

    /// Awaits the outcome, then applies an asynchronous fallible function
    /// to the success value, folding its error into a failure.
    fn try_map_async<U, E, F, Fut>(self, transform: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
        E: Into<Fault>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => Outcome::from_result(transform(value).await),
                Outcome::Failure(fault) => Outcome::Failure(fault),
            }
        }
    }

    /// Awaits the outcome, then applies a function to the fault of a
    /// failure.
    fn map_fault<F>(self, transform: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Fault) -> Fault,
    {
        async move { self.await.map_fault(transform) }
    }

    /// Awaits the outcome, then chains a function that itself returns an
    /// outcome.
    fn flat_map<U, F>(self, bind: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        async move { self.await.flat_map(bind) }
    }

    /// Awaits the outcome, then chains an asynchronous function returning
    /// the next outcome, awaiting it.
    ///
    /// A failure passes through unchanged and the continuation is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::future::OutcomeFuture;
    /// use railway::outcome::Outcome;
    ///
    /// futures::executor::block_on(async {
    ///     let outcome = async { Outcome::succeed(42) }
    ///         .flat_map_async(|x| async move { Outcome::succeed(format!("Value: {x}")) })
    ///         .await;
    ///     assert_eq!(outcome, Outcome::succeed("Value: 42".to_string()));
    /// });
    /// ```
    fn flat_map_async<U, F, Fut>(self, bind: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => bind(value).await,
                Outcome::Failure(fault) => Outcome::Failure(fault),
            }
        }
    }

    /// Awaits the outcome, then keeps a success only when the predicate
    /// accepts its value.
    fn filter<P, E>(self, predicate: P, fault: E) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        E: Into<Fault>,
    {
        async move { self.await.filter(predicate, fault) }
    }

    /// Awaits the outcome, then keeps a success only when the predicate
    /// accepts its value, building the fault lazily.
    fn ensure<P, F>(self, predicate: P, fault_with: F) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> Fault,
    {
        async move { self.await.ensure(predicate, fault_with) }
    }

    /// Awaits the outcome, then eliminates it by applying exactly one of
    /// two functions.
    fn fold<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Fault) -> R,
    {
        async move { self.await.fold(on_success, on_failure) }
    }

    /// Awaits the outcome, then eliminates it by applying and awaiting
    /// exactly one of two asynchronous projections.
    ///
    /// Matching the synchronous `fold`, nothing is captured: the chosen
    /// projection owns its own error handling.
    fn fold_async<R, S, F, SFut, FFut>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Fault) -> FFut,
        FFut: Future<Output = R>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => on_success(value).await,
                Outcome::Failure(fault) => on_failure(fault).await,
            }
        }
    }

    /// Awaits the outcome, then invokes exactly one of two side-effecting
    /// callbacks.
    fn branch<S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = ()>
    where
        S: FnOnce(&T),
        F: FnOnce(&Fault),
    {
        async move { self.await.branch(on_success, on_failure) }
    }

    /// Awaits the outcome, then runs an action on the success value,
    /// yielding the outcome unchanged.
    fn on_success<A>(self, action: A) -> impl Future<Output = Outcome<T>>
    where
        A: FnOnce(&T),
    {
        async move { self.await.on_success(action) }
    }

    /// Awaits the outcome, then awaits an asynchronous action on a clone
    /// of the success value, yielding the outcome unchanged.
    fn on_success_async<A, Fut>(self, action: A) -> impl Future<Output = Outcome<T>>
    where
        T: Clone,
        A: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => {
                    action(value.clone()).await;
                    Outcome::Success(value)
                }
                Outcome::Failure(fault) => Outcome::Failure(fault),
            }
        }
    }

    /// Awaits the outcome, then runs a fallible action on the success
    /// value, capturing its error into a failure.
    fn try_on_success<E, A>(self, action: A) -> impl Future<Output = Outcome<T>>
    where
        A: FnOnce(&T) -> Result<(), E>,
        E: Into<Fault>,
    {
        async move { self.await.try_on_success(action) }
    }

    /// Awaits the outcome, then runs an action on the fault, yielding the
    /// outcome unchanged.
    fn on_failure<A>(self, action: A) -> impl Future<Output = Outcome<T>>
    where
        A: FnOnce(&Fault),
    {
        async move { self.await.on_failure(action) }
    }

    /// Awaits the outcome, then awaits an asynchronous action on a clone
    /// of the fault, yielding the outcome unchanged.
    fn on_failure_async<A, Fut>(self, action: A) -> impl Future<Output = Outcome<T>>
    where
        A: FnOnce(Fault) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => Outcome::Success(value),
                Outcome::Failure(fault) => {
                    action(fault.clone()).await;
                    Outcome::Failure(fault)
                }
            }
        }
    }

    /// Awaits the outcome, then runs a fallible action on the fault; an
    /// error from the action becomes the new failure.
    fn try_on_failure<E, A>(self, action: A) -> impl Future<Output = Outcome<T>>
    where
        A: FnOnce(&Fault) -> Result<(), E>,
        E: Into<Fault>,
    {
        async move { self.await.try_on_failure(action) }
    }

    /// Awaits the outcome, then runs an action on it regardless of state,
    /// yielding it unchanged.
    fn inspect<A>(self, action: A) -> impl Future<Output = Outcome<T>>
    where
        A: FnOnce(&Outcome<T>),
    {
        async move { self.await.inspect(action) }
    }

    /// Awaits the outcome, then runs a fallible action on it; an error
    /// turns a success into a failure and leaves a pre-existing failure
    /// untouched.
    fn try_inspect<E, A>(self, action: A) -> impl Future<Output = Outcome<T>>
    where
        A: FnOnce(&Outcome<T>) -> Result<(), E>,
        E: Into<Fault>,
    {
        async move { self.await.try_inspect(action) }
    }

    /// Awaits the outcome, then drops the value, keeping only the
    /// success/failure state.
    fn to_completion(self) -> impl Future<Output = Completion> {
        async move { self.await.to_completion() }
    }

    /// Awaits the outcome, then chains a function that consumes the
    /// value and decides the final completion state.
    fn complete<F>(self, finish: F) -> impl Future<Output = Completion>
    where
        F: FnOnce(T) -> Completion,
    {
        async move { self.await.complete(finish) }
    }

    /// Awaits the outcome, then chains an asynchronous function deciding
    /// the final completion state, awaiting it.
    fn complete_async<F, Fut>(self, finish: F) -> impl Future<Output = Completion>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Completion>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => finish(value).await,
                Outcome::Failure(fault) => Completion::Failure(fault),
            }
        }
    }
}

impl<Fut, T> OutcomeFuture<T> for Fut where Fut: Future<Output = Outcome<T>> {}

// =============================================================================
// Asynchronous continuations on a resolved outcome
// =============================================================================

impl<T> Outcome<T> {
    /// Applies an asynchronous function to the success value, awaiting
    /// its result.
    ///
    /// The pending-continuation counterpart of [`Outcome::map`]; a
    /// failure passes through unchanged and the continuation is never
    /// invoked.
    pub async fn map_async<U, F, Fut>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(transform(value).await),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Applies an asynchronous fallible function to the success value,
    /// folding its error into a failure.
    pub async fn try_map_async<U, E, F, Fut>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
        E: Into<Fault>,
    {
        match self {
            Self::Success(value) => Outcome::from_result(transform(value).await),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Chains an asynchronous function returning the next outcome,
    /// awaiting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// futures::executor::block_on(async {
    ///     let outcome = Outcome::succeed(42)
    ///         .flat_map_async(|x| async move { Outcome::succeed(x + 1) })
    ///         .await;
    ///     assert_eq!(outcome, Outcome::succeed(43));
    /// });
    /// ```
    pub async fn flat_map_async<U, F, Fut>(self, bind: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self {
            Self::Success(value) => bind(value).await,
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Eliminates the outcome by applying and awaiting exactly one of
    /// two asynchronous projections.
    pub async fn fold_async<R, S, F, SFut, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Fault) -> FFut,
        FFut: Future<Output = R>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(fault) => on_failure(fault).await,
        }
    }

    /// Chains an asynchronous function deciding the final completion
    /// state, awaiting it.
    pub async fn complete_async<F, Fut>(self, finish: F) -> Completion
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Completion>,
    {
        match self {
            Self::Success(value) => finish(value).await,
            Self::Failure(fault) => Completion::Failure(fault),
        }
    }
}
