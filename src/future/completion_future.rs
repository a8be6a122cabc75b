//! Asynchronous operators for futures resolving to a [`Completion`].

use std::future::Future;

use crate::completion::Completion;
use crate::fault::Fault;
use crate::outcome::Outcome;

/// Composition operators for any future resolving to a [`Completion`].
///
/// Blanket-implemented. Every method awaits the receiver first, then
/// applies the same branching rules as the synchronous operator of the
/// same name; the cross-type chaining methods (`map`, `try_map`,
/// `produce`, `produce_async`) continue from a value-less success into a
/// generic [`Outcome`].
///
/// # Examples
///
/// ```rust
/// use railway::completion::Completion;
/// use railway::future::CompletionFuture;
/// use railway::outcome::Outcome;
///
/// futures::executor::block_on(async {
///     let outcome = async { Completion::succeed() }.map(|| 42).await;
///     assert_eq!(outcome, Outcome::succeed(42));
/// });
/// ```
pub trait CompletionFuture: Future<Output = Completion> + Sized {
    /// Awaits the completion, then lifts a success into a generic
    /// outcome by invoking a factory.
    fn map<T, F>(self, factory: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce() -> T,
    {
        async move { self.await.map(factory) }
    }

    /// Awaits the completion, then lifts a success through a fallible
    /// factory, capturing its error into a failure.
    fn try_map<T, E, F>(self, factory: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<Fault>,
    {
        async move { self.await.try_map(factory) }
    }

    /// Awaits the completion, then chains a function producing the next
    /// completion.
    fn flat_map<F>(self, bind: F) -> impl Future<Output = Completion>
    where
        F: FnOnce() -> Completion,
    {
        async move { self.await.flat_map(bind) }
    }

    /// Awaits the completion, then chains an asynchronous function
    /// producing the next completion, awaiting it.
    fn flat_map_async<F, Fut>(self, bind: F) -> impl Future<Output = Completion>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Completion>,
    {
        async move {
            match self.await {
                Completion::Success => bind().await,
                Completion::Failure(fault) => Completion::Failure(fault),
            }
        }
    }

    /// Awaits the completion, then chains a function producing a generic
    /// outcome.
    fn produce<T, F>(self, factory: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce() -> Outcome<T>,
    {
        async move { self.await.produce(factory) }
    }

    /// Awaits the completion, then chains an asynchronous function
    /// producing a generic outcome, awaiting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::completion::Completion;
    /// use railway::future::CompletionFuture;
    /// use railway::outcome::Outcome;
    ///
    /// futures::executor::block_on(async {
    ///     let outcome = async { Completion::succeed() }
    ///         .produce_async(|| async { Outcome::succeed("ready") })
    ///         .await;
    ///     assert_eq!(outcome, Outcome::succeed("ready"));
    /// });
    /// ```
    fn produce_async<T, F, Fut>(self, factory: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move {
            match self.await {
                Completion::Success => factory().await,
                Completion::Failure(fault) => Outcome::Failure(fault),
            }
        }
    }

    /// Awaits the completion, then keeps a success only when the
    /// predicate holds.
    fn ensure<P, E>(self, predicate: P, fault: E) -> impl Future<Output = Completion>
    where
        P: FnOnce() -> bool,
        E: Into<Fault>,
    {
        async move { self.await.ensure(predicate, fault) }
    }

    /// Awaits the completion, then eliminates it by applying exactly one
    /// of two functions.
    fn fold<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce() -> R,
        F: FnOnce(Fault) -> R,
    {
        async move { self.await.fold(on_success, on_failure) }
    }

    /// Awaits the completion, then eliminates it by applying and
    /// awaiting exactly one of two asynchronous projections.
    fn fold_async<R, S, F, SFut, FFut>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce() -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Fault) -> FFut,
        FFut: Future<Output = R>,
    {
        async move {
            match self.await {
                Completion::Success => on_success().await,
                Completion::Failure(fault) => on_failure(fault).await,
            }
        }
    }

    /// Awaits the completion, then invokes exactly one of two
    /// side-effecting callbacks.
    fn branch<S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = ()>
    where
        S: FnOnce(),
        F: FnOnce(&Fault),
    {
        async move { self.await.branch(on_success, on_failure) }
    }

    /// Awaits the completion, then runs an action on success, yielding
    /// the completion unchanged.
    fn on_success<A>(self, action: A) -> impl Future<Output = Completion>
    where
        A: FnOnce(),
    {
        async move { self.await.on_success(action) }
    }

    /// Awaits the completion, then runs a fallible action on success,
    /// capturing its error into a failure.
    fn try_on_success<E, A>(self, action: A) -> impl Future<Output = Completion>
    where
        A: FnOnce() -> Result<(), E>,
        E: Into<Fault>,
    {
        async move { self.await.try_on_success(action) }
    }

    /// Awaits the completion, then runs an action on the fault, yielding
    /// the completion unchanged.
    fn on_failure<A>(self, action: A) -> impl Future<Output = Completion>
    where
        A: FnOnce(&Fault),
    {
        async move { self.await.on_failure(action) }
    }

    /// Awaits the completion, then runs a fallible action on the fault;
    /// an error from the action becomes the new failure.
    fn try_on_failure<E, A>(self, action: A) -> impl Future<Output = Completion>
    where
        A: FnOnce(&Fault) -> Result<(), E>,
        E: Into<Fault>,
    {
        async move { self.await.try_on_failure(action) }
    }

    /// Awaits the completion, then runs an action on it regardless of
    /// state, yielding it unchanged.
    fn inspect<A>(self, action: A) -> impl Future<Output = Completion>
    where
        A: FnOnce(&Completion),
    {
        async move { self.await.inspect(action) }
    }

    /// Awaits the completion, then runs a fallible action on it; an
    /// error turns a success into a failure and leaves a pre-existing
    /// failure untouched.
    fn try_inspect<E, A>(self, action: A) -> impl Future<Output = Completion>
    where
        A: FnOnce(&Completion) -> Result<(), E>,
        E: Into<Fault>,
    {
        async move { self.await.try_inspect(action) }
    }

    /// Awaits the completion, then converts it into the equivalent
    /// `Outcome<()>`.
    fn to_outcome(self) -> impl Future<Output = Outcome<()>> {
        async move { self.await.to_outcome() }
    }
}

impl<Fut> CompletionFuture for Fut where Fut: Future<Output = Completion> {}

// =============================================================================
// Asynchronous continuations on a resolved completion
// =============================================================================

impl Completion {
    /// Lifts a success into a generic outcome by awaiting an
    /// asynchronous factory.
    ///
    /// The pending-continuation counterpart of [`Completion::map`]; on
    /// failure the factory is never invoked.
    pub async fn map_async<T, F, Fut>(self, factory: F) -> Outcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Success => Outcome::Success(factory().await),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Chains an asynchronous function producing the next completion,
    /// awaiting it.
    pub async fn flat_map_async<F, Fut>(self, bind: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        match self {
            Self::Success => bind().await,
            Self::Failure(fault) => Self::Failure(fault),
        }
    }

    /// Chains an asynchronous function producing a generic outcome,
    /// awaiting it.
    pub async fn produce_async<T, F, Fut>(self, factory: F) -> Outcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        match self {
            Self::Success => factory().await,
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Eliminates the completion by applying and awaiting exactly one of
    /// two asynchronous projections.
    pub async fn fold_async<R, S, F, SFut, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce() -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Fault) -> FFut,
        FFut: Future<Output = R>,
    {
        match self {
            Self::Success => on_success().await,
            Self::Failure(fault) => on_failure(fault).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_completion_lifts_into_outcome() {
        let outcome =
            futures::executor::block_on(async { Completion::succeed() }.map(|| "ready"));
        assert_eq!(outcome, Outcome::succeed("ready"));
    }

    #[test]
    fn test_pending_failure_keeps_fault_across_produce() {
        let outcome = futures::executor::block_on(
            async { Completion::fail("boom") }.produce_async(|| async { Outcome::succeed(1) }),
        );
        assert_eq!(outcome.fault().unwrap().message(), "boom");
    }
}
