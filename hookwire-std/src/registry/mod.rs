//! The event registry.
//!
//! [`Registry`] owns every registered [`Event`] by key and executes them.
//! Use [`RegistryBuilder`] to assemble one declaratively, or [`SharedRegistry`]
//! when several threads register and execute concurrently.
//!
//! [`SharedRegistry`]: crate::SharedRegistry

mod builder;

pub use builder::RegistryBuilder;

use crate::delivery;
use hookwire_core::{DispatchError, Dispatcher, Event, Listener, Outcome, Payload, Result};
use std::collections::HashMap;

/// A registry of events and their listeners.
///
/// The registry starts empty and only grows: events may be replaced by a
/// later registration under the same key, but nothing is ever removed.
///
/// # Example
///
/// ```rust
/// use hookwire_std::Registry;
/// use hookwire_core::{Event, Listener, Outcome};
///
/// let mut registry = Registry::new();
/// registry.register_event(Event::with_params("user.add.form.post"));
/// registry
///     .register_listener(Listener::unary("user.add.form.post", |p: Vec<String>| -> Vec<String> {
///         p.into_iter().map(|s| s.trim().to_owned()).collect()
///     }))
///     .unwrap();
///
/// let outcome = registry
///     .execute_event("user.add.form.post", vec!["  alice ".to_owned()])
///     .unwrap();
/// assert_eq!(outcome, Outcome::Params(vec!["alice".to_owned()]));
/// ```
#[derive(Debug)]
pub struct Registry<T: Payload> {
    events: HashMap<String, Event<T>>,
}

impl<T: Payload> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            events: HashMap::new(),
        }
    }

    /// Create an empty registry with room for `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: HashMap::with_capacity(capacity),
        }
    }

    /// Store `event` under its key.
    ///
    /// An event already registered under the same key is replaced, together
    /// with its listeners.
    pub fn register_event(&mut self, event: Event<T>) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            key = %event.key(),
            accepts_params = event.accepts_params(),
            replaced = self.events.contains_key(event.key()),
            "registering event"
        );

        self.events.insert(event.key().to_owned(), event);
    }

    /// Bind `listener` to the event named by its event key.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::UnknownEvent`] when no such event is registered.
    /// - [`DispatchError::ArityMismatch`] when the listener's callback does
    ///   not fit the event's params flag.
    pub fn register_listener(&mut self, listener: Listener<T>) -> Result<()> {
        let Some(event) = self.events.get_mut(listener.event_key()) else {
            return Err(DispatchError::UnknownEvent {
                key: listener.event_key().to_owned(),
            });
        };

        #[cfg(feature = "tracing")]
        let priority = listener.priority();

        event.add_listener(listener)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(key = %event.key(), priority, "bound listener");

        Ok(())
    }

    /// Run every listener of the event `key`, lowest priority first.
    ///
    /// Events with params thread `params` through their listeners and return
    /// the result as [`Outcome::Params`]; events without params return
    /// [`Outcome::Completed`].
    ///
    /// # Errors
    ///
    /// - [`DispatchError::UnknownEvent`] when no such event is registered.
    /// - [`DispatchError::MissingParams`] / [`DispatchError::UnexpectedParams`]
    ///   when `params` does not match the event's params flag. No listener
    ///   runs in that case.
    /// - [`DispatchError::MissingCallback`] when a listener without a
    ///   callback is reached. Listeners before it have already run.
    pub fn execute_event(&self, key: &str, params: Vec<T>) -> Result<Outcome<T>> {
        let event = self.event(key).ok_or_else(|| DispatchError::UnknownEvent {
            key: key.to_owned(),
        })?;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "execute_event",
            key = %key,
            listeners = event.listener_count()
        )
        .entered();

        delivery::deliver(event, params)
    }

    /// Execute an event that takes no params.
    pub fn trigger(&self, key: &str) -> Result<Outcome<T>> {
        self.execute_event(key, Vec::new())
    }

    /// All registered events by key.
    pub fn events(&self) -> &HashMap<String, Event<T>> {
        &self.events
    }

    /// Look up a single event.
    pub fn event(&self, key: &str) -> Option<&Event<T>> {
        self.events.get(key)
    }

    /// Whether an event is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.events.contains_key(key)
    }

    /// Number of registered events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no event is registered.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<T: Payload> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Payload> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl<T: Payload> Dispatcher<T> for Registry<T> {
    fn register_event(&mut self, event: Event<T>) {
        Registry::register_event(self, event);
    }

    fn register_listener(&mut self, listener: Listener<T>) -> Result<()> {
        Registry::register_listener(self, listener)
    }

    fn execute_event(&self, key: &str, params: Vec<T>) -> Result<Outcome<T>> {
        Registry::execute_event(self, key, params)
    }

    fn events(&self) -> &HashMap<String, Event<T>> {
        Registry::events(self)
    }
}
