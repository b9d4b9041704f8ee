//! Side-effecting actions attached to a transition.

use super::error::ActionError;
use async_trait::async_trait;

/// Action run before or after a transition's state change.
///
/// Callbacks receive the context mutably so they can update domain data,
/// but they must not change its state. Before-callbacks observe the
/// source state; after-callbacks observe the target state.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use statewise::core::{ActionError, TransitionCallback};
///
/// struct Process {
///     log: Vec<String>,
/// }
///
/// struct Announce;
///
/// #[async_trait]
/// impl TransitionCallback<Process> for Announce {
///     async fn call(&self, process: &mut Process) -> Result<(), ActionError> {
///         process.log.push("process ended".to_string());
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait TransitionCallback<C: Send>: Send + Sync {
    async fn call(&self, context: &mut C) -> Result<(), ActionError>;

    /// Name used in logs.
    fn describe(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

type CallbackFn<C> = Box<dyn Fn(&mut C) -> Result<(), ActionError> + Send + Sync>;

/// Synchronous callback built from a closure.
pub struct Callback<C> {
    name: Option<String>,
    action: CallbackFn<C>,
}

impl<C> Callback<C> {
    pub fn new<F>(action: F) -> Self
    where
        F: Fn(&mut C) -> Result<(), ActionError> + Send + Sync + 'static,
    {
        Callback {
            name: None,
            action: Box::new(action),
        }
    }

    pub fn named<F>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn(&mut C) -> Result<(), ActionError> + Send + Sync + 'static,
    {
        Callback {
            name: Some(name.into()),
            action: Box::new(action),
        }
    }

    /// Run the closure directly.
    pub fn run(&self, context: &mut C) -> Result<(), ActionError> {
        (self.action)(context)
    }
}

#[async_trait]
impl<C: Send> TransitionCallback<C> for Callback<C> {
    async fn call(&self, context: &mut C) -> Result<(), ActionError> {
        self.run(context)
    }

    fn describe(&self) -> &str {
        self.name.as_deref().unwrap_or("callback")
    }
}
