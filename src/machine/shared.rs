//! Per-context exclusive access for concurrent callers.
//!
//! `StateMachine::transition` takes `&mut C`, which already rules out two
//! overlapping calls on a context with a single owner. When a context is
//! shared between tasks, wrap it in [`SharedContext`]; the state machine
//! then holds the context's lock across the whole protocol, so two
//! callers can never both pass the from-state check before either one
//! commits.

use crate::core::StateAware;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// A context behind an async mutex, cheap to clone across tasks.
pub struct SharedContext<C> {
    inner: Arc<Mutex<C>>,
}

impl<C> SharedContext<C> {
    pub fn new(context: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(context)),
        }
    }

    /// Wait for exclusive access to the context.
    pub async fn lock(&self) -> MutexGuard<'_, C> {
        self.inner.lock().await
    }

    /// Snapshot of the current state, taken under the lock.
    pub async fn state(&self) -> C::State
    where
        C: StateAware,
    {
        self.inner.lock().await.state().clone()
    }

    /// Recover the context once every other handle has been dropped.
    pub fn into_inner(self) -> Option<C> {
        Arc::try_unwrap(self.inner).ok().map(Mutex::into_inner)
    }
}

impl<C> Clone for SharedContext<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> From<C> for SharedContext<C> {
    fn from(context: C) -> Self {
        Self::new(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        state: &'static str,
        hits: u32,
    }

    impl StateAware for Counter {
        type State = &'static str;

        fn state(&self) -> &&'static str {
            &self.state
        }

        fn set_state(&mut self, state: &'static str) {
            self.state = state;
        }
    }

    #[tokio::test]
    async fn clones_share_one_context() {
        let shared = SharedContext::new(Counter {
            state: "idle",
            hits: 0,
        });
        let other = shared.clone();

        other.lock().await.hits += 1;
        shared.lock().await.set_state("busy");

        assert_eq!(other.state().await, "busy");
        drop(other);

        let counter = shared.into_inner().unwrap();
        assert_eq!(counter.hits, 1);
    }

    #[tokio::test]
    async fn into_inner_fails_while_shared() {
        let shared = SharedContext::from(Counter {
            state: "idle",
            hits: 0,
        });
        let _held = shared.clone();

        assert!(shared.into_inner().is_none());
    }
}
