use std::{
    collections::{HashMap, HashSet},
    future::Future,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

use futures::{
    FutureExt, TryFutureExt,
    future::{BoxFuture, Shared, try_join_all},
};
use tracing::{debug, trace};

use crate::{
    doc::{DocNode, Entry},
    meta::{Builtin, Identity},
};

use super::{DocGenError, DocGenOptions, Generated};

type Pending = Shared<BoxFuture<'static, Result<Generated, DocGenError>>>;

/// Decides whether a named schema is embedded where it is used or gets an
/// entry of its own.
///
/// Identity overrides win over name overrides, which win over the defaults.
/// Built-in primitives are inline by default; any other name is not.
#[derive(Debug, Clone)]
pub struct InlinePolicy {
    overrides: HashMap<Identity, bool>,
    by_name: HashMap<String, bool>,
    defaults: HashSet<Identity>,
}

impl InlinePolicy {
    /// Policy built from generator options.
    pub fn new(options: &DocGenOptions) -> Self {
        Self {
            overrides: options.inline_overrides.iter().cloned().collect(),
            by_name: options.inline_by_name.clone(),
            defaults: Builtin::ALL.into_iter().map(Builtin::identity).collect(),
        }
    }

    /// Whether `identity` is embedded rather than linked.
    pub fn is_inline(&self, identity: &Identity) -> bool {
        self.overrides
            .get(identity)
            .or_else(|| self.by_name.get(identity.name()))
            .copied()
            .unwrap_or_else(|| self.defaults.contains(identity))
    }
}

impl Default for InlinePolicy {
    fn default() -> Self {
        Self::new(&DocGenOptions::default())
    }
}

/// Cached generation for one identity.
#[derive(Clone)]
pub struct Slot {
    entry: Option<Arc<Entry>>,
    pending: Pending,
}

impl Slot {
    /// Entry handle for non-inline identities. It exists before its content
    /// is generated.
    pub fn entry(&self) -> Option<&Arc<Entry>> {
        self.entry.as_ref()
    }

    /// Waits for the shared computation.
    pub async fn wait(&self) -> Result<Generated, DocGenError> {
        self.pending.clone().await
    }
}

#[derive(Default)]
struct State {
    slots: HashMap<Identity, Slot>,
    order: Vec<Identity>,
}

/// Single-flight cache of generated documentation, keyed by identity.
///
/// The first request for an identity stores the computation before it has
/// run; every later request gets that same computation back. A registry
/// belongs to one generator and starts out empty.
pub struct Registry {
    state: Mutex<State>,
    policy: InlinePolicy,
    computations: AtomicUsize,
}

impl Registry {
    /// Empty registry using `policy`.
    pub fn new(policy: InlinePolicy) -> Self {
        Self {
            state: Mutex::new(State::default()),
            policy,
            computations: AtomicUsize::new(0),
        }
    }

    /// Returns the computation for `identity`, starting it with `compute` if
    /// this is the first request.
    ///
    /// `compute` runs at most once per identity and is told whether the
    /// identity is inline. Non-inline identities get an [`Entry`] that
    /// receives the computed content once it settles.
    pub fn request<F, Fut>(&self, identity: &Identity, compute: F) -> Slot
    where
        F: FnOnce(bool) -> Fut,
        Fut: Future<Output = Result<DocNode, DocGenError>> + Send + 'static,
    {
        let mut state = self.lock();

        if let Some(slot) = state.slots.get(identity) {
            trace!(identity = %identity, "alias cache hit");
            return slot.clone();
        }

        let inline = self.policy.is_inline(identity);
        debug!(identity = %identity, inline, "alias cache miss, starting generation");
        self.computations.fetch_add(1, Ordering::Relaxed);

        let computation = compute(inline);
        let entry = (!inline).then(|| Arc::new(Entry::new(identity.clone())));

        let pending = match entry.clone() {
            Some(entry) => computation
                .map_ok(move |content| {
                    entry.fill(content);
                    Generated::Entry(entry)
                })
                .boxed(),
            None => computation.map_ok(Generated::Fragment).boxed(),
        }
        .shared();

        let slot = Slot { entry, pending };
        state.slots.insert(identity.clone(), slot.clone());
        state.order.push(identity.clone());

        slot
    }

    /// Waits until `roots` and every entry reachable from their content
    /// through links have settled.
    ///
    /// Entries that only unrelated requests reach are not waited on.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a reachable computation.
    pub async fn settle(&self, roots: Vec<Arc<Entry>>) -> Result<(), DocGenError> {
        let mut seen = HashSet::new();
        let mut frontier = roots;

        loop {
            let pending: Vec<Pending> = {
                let state = self.lock();
                frontier
                    .drain(..)
                    .filter(|entry| seen.insert(entry.identity().clone()))
                    .filter_map(|entry| state.slots.get(entry.identity()))
                    .map(|slot| slot.pending.clone())
                    .collect()
            };

            if pending.is_empty() {
                return Ok(());
            }

            trace!(entries = pending.len(), "settling linked entries");
            frontier = try_join_all(pending)
                .await?
                .iter()
                .filter_map(Generated::content)
                .flat_map(DocNode::links)
                .collect();
        }
    }

    /// Named entries in the order they were first requested.
    pub fn entries(&self) -> Vec<Arc<Entry>> {
        let state = self.lock();
        state
            .order
            .iter()
            .filter_map(|identity| state.slots.get(identity))
            .filter_map(|slot| slot.entry.clone())
            .collect()
    }

    /// Number of computations started.
    pub fn computations(&self) -> usize {
        self.computations.load(Ordering::Relaxed)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(InlinePolicy::default())
    }
}
