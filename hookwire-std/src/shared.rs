//! A registry that can be shared between threads.

use crate::{delivery, registry::Registry};
use hookwire_core::{DispatchError, Event, Listener, Outcome, Payload, Result};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// A cloneable handle to a [`Registry`] guarded by a reader-writer lock.
///
/// Registrations take the write lock. An execution takes the read lock only
/// long enough to clone the target [`Event`], then runs its listeners with no
/// lock held. Any number of executions may run at once, and a callback may
/// execute other events or register new ones on the same `SharedRegistry`.
///
/// An execution sees the event as it was when the execution started;
/// listeners bound while it runs take effect from the next execution.
///
/// # Example
///
/// ```rust
/// use hookwire_std::SharedRegistry;
/// use hookwire_core::{Event, Listener, Outcome};
/// use std::thread;
///
/// let registry = SharedRegistry::<u32>::new();
/// registry.register_event(Event::new("tick"));
/// registry.register_listener(Listener::nullary("tick", || {})).unwrap();
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let registry = registry.clone();
///         thread::spawn(move || registry.trigger("tick"))
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap(), Ok(Outcome::Completed));
/// }
/// ```
pub struct SharedRegistry<T: Payload> {
    inner: Arc<RwLock<Registry<T>>>,
}

impl<T: Payload> SharedRegistry<T> {
    /// Create an empty shared registry.
    pub fn new() -> Self {
        Self::from_registry(Registry::new())
    }

    /// Share an existing registry.
    pub fn from_registry(registry: Registry<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// See [`Registry::register_event`].
    pub fn register_event(&self, event: Event<T>) {
        self.write().register_event(event);
    }

    /// See [`Registry::register_listener`].
    pub fn register_listener(&self, listener: Listener<T>) -> Result<()> {
        self.write().register_listener(listener)
    }

    /// See [`Registry::execute_event`].
    ///
    /// Listeners run against a snapshot of the event, outside the lock.
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

        delivery::deliver(&event, params)
    }

    /// See [`Registry::trigger`].
    pub fn trigger(&self, key: &str) -> Result<Outcome<T>> {
        self.execute_event(key, Vec::new())
    }

    /// An owned copy of the event registered under `key`.
    pub fn event(&self, key: &str) -> Option<Event<T>> {
        self.read().event(key).cloned()
    }

    /// An owned snapshot of the registered events.
    pub fn events(&self) -> HashMap<String, Event<T>> {
        self.read().events().clone()
    }

    /// Whether an event is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.read().contains(key)
    }

    /// Number of registered events.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no event is registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Nothing a panic interrupts can leave the registry half-updated.
    fn read(&self) -> RwLockReadGuard<'_, Registry<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Payload> Clone for SharedRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Payload> Default for SharedRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Payload> From<Registry<T>> for SharedRegistry<T> {
    fn from(registry: Registry<T>) -> Self {
        Self::from_registry(registry)
    }
}
