//! Generic async resource hook: producer in, loading/data/error signals out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list page and the admin dashboard load remote data through this
//! hook. The producer runs on mount (and whenever the dependency key
//! changes), and callers pass `refetch` down to mutation forms so a
//! successful create/update/delete triggers a fresh load.
//!
//! ORDERING
//! ========
//! Each invocation is tagged with a generation number; a completion whose
//! tag is stale is discarded, so overlapping `refetch` calls cannot apply
//! an older result over a newer one. Completions write through `try_update`
//! and become no-ops once the owning scope is disposed.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::prelude::*;

type Producer<T> = Rc<dyn Fn() -> Pin<Box<dyn Future<Output = Result<T, String>>>>>;

/// Observable state of one asynchronous resource.
///
/// On failure `data` keeps its previous value so a partially loaded view
/// does not flicker to empty on a failed refresh; a new attempt clears
/// `error` but keeps `data` visible until it resolves.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { data: None, loading: true, error: None }
    }
}

impl<T> FetchState<T> {
    /// A new attempt is in flight.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// The in-flight attempt resolved.
    pub fn resolve(&mut self, value: T) {
        self.data = Some(value);
        self.loading = false;
    }

    /// The in-flight attempt failed with a user-facing message.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }
}

/// Apply a finished producer result to the state.
pub(crate) fn apply_completion<T>(state: &mut FetchState<T>, result: Result<T, String>) {
    match result {
        Ok(value) => state.resolve(value),
        Err(message) => state.reject(message),
    }
}

/// Whether a completion tagged `tag` may write its result.
///
/// `current` is the generation counter at completion time; `None` means the
/// owning scope is gone. Only the invocation holding the live tag applies.
pub(crate) fn completion_applies(tag: u64, current: Option<u64>) -> bool {
    current == Some(tag)
}

/// Handle owning one fetchable resource. `Copy`, so it can move freely into
/// view closures and child component callbacks.
pub struct FetchHandle<T: 'static> {
    pub state: RwSignal<FetchState<T>>,
    generation: StoredValue<u64>,
    producer: StoredValue<Producer<T>, LocalStorage>,
}

impl<T: 'static> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FetchHandle<T> {}

impl<T: Send + Sync + 'static> FetchHandle<T> {
    fn new<F, Fut>(producer: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, String>> + 'static,
    {
        let producer: Producer<T> = Rc::new(move || Box::pin(producer()));
        Self {
            state: RwSignal::new(FetchState::default()),
            generation: StoredValue::new(0),
            producer: StoredValue::new_local(producer),
        }
    }

    fn run(&self) {
        let tag = self
            .generation
            .try_update_value(|g| {
                *g += 1;
                *g
            })
            .unwrap_or(0);
        let _ = self.state.try_update(FetchState::begin);

        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            let generation = self.generation;
            let fut = self.producer.with_value(|p| p());
            leptos::task::spawn_local(async move {
                let result = fut.await;
                if !completion_applies(tag, generation.try_get_value()) {
                    // A later invocation superseded this one.
                    return;
                }
                let _ = state.try_update(|s| apply_completion(s, result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = tag;
        }
    }

    /// Manually repeat the fetch. Safe to call while a previous invocation
    /// is still in flight; the newest invocation's result wins.
    pub fn refetch(&self) {
        self.run();
    }
}

/// Run `producer` once on creation and expose its state plus `refetch`.
pub fn use_fetch<T, F, Fut>(producer: F) -> FetchHandle<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let handle = FetchHandle::new(producer);
    handle.run();
    handle
}

/// Like [`use_fetch`], but re-runs whenever `deps` changes by value.
///
/// The producer should read its inputs untracked; the dependency key alone
/// decides when it re-runs.
pub fn use_fetch_with_deps<T, F, Fut, D, K>(producer: F, deps: D) -> FetchHandle<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
    D: Fn() -> K + Send + Sync + 'static,
    K: PartialEq + Clone + Send + Sync + 'static,
{
    let handle = FetchHandle::new(producer);
    let key = Memo::new(move |_| deps());
    Effect::new(move || {
        key.track();
        handle.run();
    });
    handle
}
