//! Identity resolver shared by every protected page.
//!
//! DESIGN
//! ======
//! One resolver exists per mounted view. It hands out a single [`MountTicket`]
//! per mount, so however often the view re-runs only one request is issued.
//! `unmount()` bumps the mount generation and aborts the in-flight request;
//! a completion carrying an older generation is dropped before it can touch
//! view state.
//!
//! Failures never escape: they become `Failed(kind)` and are reported through
//! the `log` facade (the browser console in WASM builds).

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{AbortHandle, Abortable};
use leptos::prelude::{RwSignal, Set};

use super::identity::{Identity, ResolutionState};
use crate::net::error::{FailureKind, SessionError};
use crate::net::session::SessionApi;
use crate::net::types::IdentityPayload;

/// Destination for resolution state updates.
pub trait StateSink {
    /// Deliver a new state. Returns `false` if the receiver no longer exists.
    fn publish(&self, state: ResolutionState) -> bool;
}

impl StateSink for RwSignal<ResolutionState> {
    fn publish(&self, state: ResolutionState) -> bool {
        self.try_set(state).is_none()
    }
}

/// Proof that a resolution was started during a particular mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountTicket {
    generation: u64,
}

impl MountTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
struct Lifecycle {
    generation: u64,
    mounted: bool,
    started: bool,
    state: ResolutionState,
    in_flight: Option<AbortHandle>,
}

/// Per-view identity resolution state machine.
///
/// Clones share the same lifecycle, so the copy moved into the request task
/// and the copy held by the view's cleanup observe each other.
#[derive(Clone, Debug)]
pub struct IdentityResolver<S> {
    lifecycle: Arc<Mutex<Lifecycle>>,
    sink: S,
}

impl<S: StateSink> IdentityResolver<S> {
    /// Create a resolver for a freshly mounted view, in `Unresolved`.
    pub fn new(sink: S) -> Self {
        let lifecycle = Lifecycle {
            generation: 0,
            mounted: true,
            started: false,
            state: ResolutionState::Unresolved,
            in_flight: None,
        };
        Self { lifecycle: Arc::new(Mutex::new(lifecycle)), sink }
    }

    #[must_use]
    pub fn state(&self) -> ResolutionState {
        self.lock().state.clone()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.lock().mounted
    }

    /// Claim the single resolution slot of the current mount.
    ///
    /// Returns `None` if resolution already started for this mount or the
    /// view is unmounted.
    pub fn begin(&self) -> Option<MountTicket> {
        let mut lc = self.lock();
        if !lc.mounted || lc.started {
            return None;
        }
        lc.started = true;
        Some(MountTicket { generation: lc.generation })
    }

    /// Apply the outcome of the request started with `ticket`.
    ///
    /// Returns `true` if the state changed; stale tickets are ignored.
    pub fn finish(&self, ticket: MountTicket, outcome: Result<IdentityPayload, SessionError>) -> bool {
        let next = {
            let mut lc = self.lock();
            if !lc.mounted || lc.generation != ticket.generation || lc.state.is_terminal() {
                log::debug!(
                    "discarding identity result for mount {} (current {})",
                    ticket.generation,
                    lc.generation
                );
                return false;
            }
            lc.in_flight = None;
            lc.state = settle(outcome);
            lc.state.clone()
        };
        if !self.sink.publish(next) {
            log::debug!("identity state receiver already disposed");
        }
        true
    }

    /// Tear down the current mount: abort the request and drop late results.
    pub fn unmount(&self) {
        let in_flight = {
            let mut lc = self.lock();
            if !lc.mounted {
                return;
            }
            lc.mounted = false;
            lc.generation += 1;
            lc.in_flight.take()
        };
        if let Some(handle) = in_flight {
            handle.abort();
        }
    }

    /// Start a new mount cycle after [`IdentityResolver::unmount`].
    pub fn mount(&self) {
        {
            let mut lc = self.lock();
            if lc.mounted {
                return;
            }
            lc.mounted = true;
            lc.started = false;
            lc.state = ResolutionState::Unresolved;
        }
        self.sink.publish(ResolutionState::Unresolved);
    }

    /// Resolve the current mount's identity through `api`.
    ///
    /// Issues at most one request per mount. Returns `true` if this call
    /// settled the state.
    pub async fn resolve<A>(&self, api: &A) -> bool
    where
        A: SessionApi + ?Sized,
    {
        let Some(ticket) = self.begin() else {
            log::debug!("identity resolution already started for this mount");
            return false;
        };
        let (handle, registration) = AbortHandle::new_pair();
        self.track(ticket, handle);

        match Abortable::new(api.current_identity(), registration).await {
            Ok(outcome) => self.finish(ticket, outcome),
            Err(_aborted) => {
                log::debug!("identity request for mount {} aborted", ticket.generation);
                false
            }
        }
    }

    fn track(&self, ticket: MountTicket, handle: AbortHandle) {
        let mut lc = self.lock();
        if lc.mounted && lc.generation == ticket.generation {
            lc.in_flight = Some(handle);
        } else {
            handle.abort();
        }
    }

    fn lock(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn settle(outcome: Result<IdentityPayload, SessionError>) -> ResolutionState {
    match outcome.and_then(|payload| Identity::from_payload(&payload)) {
        Ok(identity) => {
            log::debug!("identity resolved as {}", identity.display_name);
            ResolutionState::Resolved(identity)
        }
        Err(e) => {
            report(&e);
            ResolutionState::Failed(e.kind())
        }
    }
}

fn report(err: &SessionError) {
    match err.kind() {
        FailureKind::NotAuthenticated => log::warn!("not logged in: {err}"),
        FailureKind::Transport | FailureKind::Malformed => {
            log::error!("identity resolution failed [{}]: {err}", err.error_code());
        }
    }
}
