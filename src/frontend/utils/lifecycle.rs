use crate::frontend::utils::errors::{FrontendError, FrontendResult};
use leptos::prelude::*;
use log::debug;
use std::{
    future::Future,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

/// Render state of a view which loads its data once on mount.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Pending,
    Ready(T),
    Failed(FrontendError),
}

impl<T> LoadState<T> {
    /// Leaves `Pending` with the given result. `Ready` and `Failed` are terminal, so later
    /// results are ignored and `false` is returned.
    pub fn settle(&mut self, result: FrontendResult<T>) -> bool {
        if !matches!(self, Self::Pending) {
            return false;
        }
        *self = match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e),
        };
        true
    }
}

/// Shared flag which is flipped when the view owning a fetch goes away.
#[derive(Clone, Debug, Default)]
pub struct MountToken(Arc<AtomicBool>);

impl MountToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Token which is cancelled when the current reactive owner is cleaned up.
fn mount_token() -> MountToken {
    let token = MountToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });
    token
}

/// Awaits `fetch` and settles a fresh state with its result. If `token` was cancelled in the
/// meantime the result is dropped and the state stays `Pending`.
pub async fn settle_if_mounted<T, Fut>(token: MountToken, fetch: Fut) -> LoadState<T>
where
    Fut: Future<Output = FrontendResult<T>>,
{
    let result = fetch.await;
    let mut state = LoadState::Pending;
    if token.is_cancelled() {
        debug!("View unmounted before fetch resolved, dropping result");
    } else {
        state.settle(result);
    }
    state
}

/// Loads data for the current view through a local resource. `fetch` tracks no signals, so it
/// runs exactly once after the view is mounted in the browser. Unmounting the view cancels
/// publishing the result, not the request itself.
///
/// Local resources don't run during server rendering, so there the surrounding `Suspense`
/// shows its fallback.
pub fn load_on_mount<T, F, Fut>(fetch: F) -> LocalResource<LoadState<T>>
where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = FrontendResult<T>> + 'static,
{
    let token = mount_token();
    LocalResource::new(move || settle_if_mounted(token.clone(), fetch()))
}
