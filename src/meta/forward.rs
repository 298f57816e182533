use std::{fmt, future::Future};

use futures::{
    FutureExt,
    future::{BoxFuture, Shared},
};
use tokio::sync::oneshot;

use super::{Described, Meta};

type Resolution = Shared<BoxFuture<'static, Option<Meta>>>;

/// Placeholder for a schema that does not exist yet.
///
/// Mutually recursive schemas refer to each other through forwards. A forward
/// resolves at most once; every clone observes the same resolution.
#[derive(Clone)]
pub struct Forward {
    resolution: Resolution,
}

/// Write side of a [`Forward`] created with [`Forward::pending`].
///
/// Resolving consumes the resolver, so a forward cannot be resolved twice.
/// Dropping it without resolving makes every wait on the forward fail.
pub struct ForwardResolver {
    tx: oneshot::Sender<Meta>,
}

impl Forward {
    /// Creates an unresolved forward and the handle that resolves it.
    pub fn pending() -> (Self, ForwardResolver) {
        let (tx, rx) = oneshot::channel();
        let forward = Self {
            resolution: rx.map(Result::ok).boxed().shared(),
        };

        (forward, ForwardResolver { tx })
    }

    /// Forward backed by an arbitrary future.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Meta> + Send + 'static,
    {
        Self {
            resolution: future.map(Some).boxed().shared(),
        }
    }

    /// Waits for the referenced schema.
    ///
    /// Returns `None` if the resolver was dropped without resolving.
    pub async fn resolved(&self) -> Option<Meta> {
        self.resolution.clone().await
    }

    /// The referenced schema, if the forward has already been awaited to
    /// completion somewhere.
    pub fn peek(&self) -> Option<Meta> {
        self.resolution.peek().cloned().flatten()
    }
}

impl ForwardResolver {
    /// Resolves the forward to `schema`.
    pub fn resolve(self, schema: impl Described) {
        // Nobody is waiting if every clone of the forward is gone.
        let _ = self.tx.send(schema.meta());
    }
}

impl fmt::Debug for Forward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forward")
            .field("resolved", &self.resolution.peek().is_some())
            .finish()
    }
}

impl fmt::Debug for ForwardResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardResolver").finish_non_exhaustive()
    }
}
