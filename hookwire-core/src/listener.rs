//! # Listeners
//!
//! A listener binds a [`Callback`] to an event key with an integer priority.
//! Lower priorities run first; listeners sharing a priority run in the order
//! they were registered.
//!
//! A listener may be built without a callback. That is not an error until
//! the dispatcher reaches it during execution.

use crate::{
    callback::{Callback, NullaryCallback, UnaryCallback},
    payload::Payload,
};

/// Priority given to listeners that do not set one.
pub const DEFAULT_PRIORITY: i32 = 100;

/// A prioritized callback bound to one event key.
///
/// # Example
///
/// ```rust
/// use hookwire_core::{Listener, DEFAULT_PRIORITY};
///
/// let audit = Listener::<String>::nullary("user.action.login", || {});
/// assert_eq!(audit.priority(), DEFAULT_PRIORITY);
///
/// let early = Listener::<String>::unary("user.add.form.post", |p: Vec<String>| p)
///     .with_priority(10);
/// assert_eq!(early.priority(), 10);
/// ```
#[derive(Debug)]
pub struct Listener<T: Payload> {
    event_key: String,
    callback: Option<Callback<T>>,
    priority: i32,
}

impl<T: Payload> Listener<T> {
    /// Create a listener for `event_key` with no callback and the default priority.
    pub fn new(event_key: impl Into<String>) -> Self {
        Self {
            event_key: event_key.into(),
            callback: None,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Create a listener for an event that does not accept params.
    pub fn nullary<F: NullaryCallback>(event_key: impl Into<String>, callback: F) -> Self {
        Self::new(event_key).with_callback(Callback::nullary(callback))
    }

    /// Create a listener for an event that accepts params.
    pub fn unary<F: UnaryCallback<T>>(event_key: impl Into<String>, callback: F) -> Self {
        Self::new(event_key).with_callback(Callback::unary(callback))
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the callback.
    pub fn with_callback(mut self, callback: Callback<T>) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Key of the event this listener is bound to.
    pub fn event_key(&self) -> &str {
        &self.event_key
    }

    /// Rebind the listener to another event key.
    pub fn set_event_key(&mut self, event_key: impl Into<String>) {
        self.event_key = event_key.into();
    }

    /// The bound callback, if any.
    pub fn callback(&self) -> Option<&Callback<T>> {
        self.callback.as_ref()
    }

    /// Replace the callback.
    pub fn set_callback(&mut self, callback: Callback<T>) {
        self.callback = Some(callback);
    }

    /// Execution priority (lower runs first).
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Change the execution priority.
    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }
}

impl<T: Payload> Clone for Listener<T> {
    fn clone(&self) -> Self {
        Self {
            event_key: self.event_key.clone(),
            callback: self.callback.clone(),
            priority: self.priority,
        }
    }
}
