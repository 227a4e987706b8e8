//! Dispatcher core trait.

use crate::{
    error::Result,
    event::Event,
    listener::Listener,
    outcome::Outcome,
    payload::Payload,
};
use std::collections::HashMap;

/// A registry of events that executes their listeners on demand.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch events with `{T}` params",
    label = "missing `Dispatcher` implementation",
    note = "Implement `Dispatcher<{T}>` to register and execute events."
)]
pub trait Dispatcher<T: Payload> {
    /// Store `event` under its key, replacing any event with the same key.
    fn register_event(&mut self, event: Event<T>);

    /// Append `listener` to the event named by its event key.
    ///
    /// Fails with [`DispatchError::UnknownEvent`] when that event is not
    /// registered.
    ///
    /// [`DispatchError::UnknownEvent`]: crate::DispatchError::UnknownEvent
    fn register_listener(&mut self, listener: Listener<T>) -> Result<()>;

    /// Run every listener of the event `key` in priority order.
    ///
    /// `params` must be non-empty exactly when the event accepts params.
    fn execute_event(&self, key: &str, params: Vec<T>) -> Result<Outcome<T>>;

    /// All registered events by key.
    fn events(&self) -> &HashMap<String, Event<T>>;

    /// Execute an event without params.
    fn trigger(&self, key: &str) -> Result<Outcome<T>> {
        self.execute_event(key, Vec::new())
    }
}
