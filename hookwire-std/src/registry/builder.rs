use super::Registry;
use hookwire_core::{Event, Listener, Payload, Result};

enum Step<T: Payload> {
    Event(Event<T>),
    Listener(Listener<T>),
}

/// Builder for constructing a [`Registry`].
///
/// Events and listeners are applied in the order they are added, so a
/// listener must come after the event it binds to. Registration errors are
/// reported by [`build`](Self::build).
///
/// # Example
/// ```rust
/// use hookwire_std::RegistryBuilder;
/// use hookwire_core::{Event, Listener};
///
/// let registry = RegistryBuilder::<String>::new()
///     .event(Event::new("user.action.logout"))
///     .listener(Listener::nullary("user.action.logout", || {}).with_priority(10))
///     .build()
///     .unwrap();
///
/// assert!(registry.contains("user.action.logout"));
/// ```
pub struct RegistryBuilder<T: Payload> {
    steps: Vec<Step<T>>,
}

impl<T: Payload> RegistryBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Register an event.
    pub fn event(mut self, event: Event<T>) -> Self {
        self.event_mut(event);
        self
    }

    /// Register an event (mutable version).
    pub fn event_mut(&mut self, event: Event<T>) {
        self.steps.push(Step::Event(event));
    }

    /// Register a listener.
    pub fn listener(mut self, listener: Listener<T>) -> Self {
        self.listener_mut(listener);
        self
    }

    /// Register a listener (mutable version).
    pub fn listener_mut(&mut self, listener: Listener<T>) {
        self.steps.push(Step::Listener(listener));
    }

    /// Number of queued registrations.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing has been queued.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Apply every registration and return the registry.
    ///
    /// Stops at the first failing listener registration.
    pub fn build(self) -> Result<Registry<T>> {
        let events = self
            .steps
            .iter()
            .filter(|step| matches!(step, Step::Event(_)))
            .count();

        let mut registry = Registry::with_capacity(events);
        for step in self.steps {
            match step {
                Step::Event(event) => registry.register_event(event),
                Step::Listener(listener) => registry.register_listener(listener)?,
            }
        }
        Ok(registry)
    }
}

impl<T: Payload> Default for RegistryBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
