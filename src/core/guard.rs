//! Guard predicates for controlling state transitions.
//!
//! Guards decide whether a transition may proceed. They run after the
//! source-state check and before any callback, strictly one at a time
//! and in declared order. A guard reads the context; it never writes
//! the context's state.

use super::error::ActionError;
use async_trait::async_trait;

/// Predicate over a context, evaluated before a transition commits.
///
/// Implementations may suspend (I/O, calls into other subsystems). The
/// state machine awaits each guard to completion before starting the
/// next one.
///
/// Returning `Ok(false)` rejects the transition. Returning `Err` rejects
/// it as well, with the error message recorded as the rejection reason.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use statewise::core::{ActionError, TransitionGuard};
///
/// struct Order {
///     total: u64,
/// }
///
/// struct HasTotal;
///
/// #[async_trait]
/// impl TransitionGuard<Order> for HasTotal {
///     async fn evaluate(&self, order: &Order) -> Result<bool, ActionError> {
///         Ok(order.total > 0)
///     }
/// }
/// ```
#[async_trait]
pub trait TransitionGuard<C: Sync>: Send + Sync {
    /// Decide whether the transition may proceed for this context.
    async fn evaluate(&self, context: &C) -> Result<bool, ActionError>;

    /// Name used in rejection errors and logs.
    fn describe(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Synchronous guard built from a closure.
///
/// # Example
///
/// ```rust
/// use statewise::core::Guard;
///
/// struct Process {
///     progress: u8,
/// }
///
/// let finished = Guard::named("finished", |p: &Process| p.progress == 100);
///
/// assert!(finished.check(&Process { progress: 100 }));
/// assert!(!finished.check(&Process { progress: 50 }));
/// ```
pub struct Guard<C> {
    name: Option<String>,
    predicate: Box<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            name: None,
            predicate: Box::new(predicate),
        }
    }

    /// Create a guard whose name shows up in rejection errors.
    pub fn named<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            name: Some(name.into()),
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate directly.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}

#[async_trait]
impl<C: Sync> TransitionGuard<C> for Guard<C> {
    async fn evaluate(&self, context: &C) -> Result<bool, ActionError> {
        Ok(self.check(context))
    }

    fn describe(&self) -> &str {
        self.name.as_deref().unwrap_or("guard")
    }
}
