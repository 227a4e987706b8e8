//! # Events
//!
//! An event is a named registration point. It declares whether executing it
//! takes params and holds the listeners bound to it, in the order they were
//! added.

use crate::{
    error::{DispatchError, Result},
    listener::Listener,
    payload::Payload,
};

/// A named registration point for listeners.
///
/// Keys are compared by exact string match. Examples of keys:
/// `user.add.form.post`, `user.action.login`, `user.action.logout`.
#[derive(Debug)]
pub struct Event<T: Payload> {
    key: String,
    accepts_params: bool,
    listeners: Vec<Listener<T>>,
}

impl<T: Payload> Event<T> {
    /// Create an event that is executed without params.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            accepts_params: false,
            listeners: Vec::new(),
        }
    }

    /// Create an event that requires params on execution.
    pub fn with_params(key: impl Into<String>) -> Self {
        Self {
            accepts_params: true,
            ..Self::new(key)
        }
    }

    /// The registry key of this event.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Change the key. Has no effect on a registry the event is already stored in.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    /// Whether execution takes params.
    pub fn accepts_params(&self) -> bool {
        self.accepts_params
    }

    /// Change the params flag.
    ///
    /// Listeners already added keep their callbacks; a mismatch is reported
    /// when such a listener is reached during execution.
    pub fn set_accepts_params(&mut self, accepts_params: bool) {
        self.accepts_params = accepts_params;
    }

    /// Listeners in the order they were added.
    pub fn listeners(&self) -> &[Listener<T>] {
        &self.listeners
    }

    /// Number of bound listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Append a listener.
    ///
    /// Fails with [`DispatchError::ArityMismatch`] when the listener carries a
    /// callback whose arity does not fit this event. Listeners without a
    /// callback are accepted.
    pub fn add_listener(&mut self, listener: Listener<T>) -> Result<()> {
        if let Some(callback) = listener.callback()
            && !callback.fits(self.accepts_params)
        {
            return Err(DispatchError::ArityMismatch {
                key: self.key.clone(),
                accepts_params: self.accepts_params,
            });
        }
        self.listeners.push(listener);
        Ok(())
    }
}

impl<T: Payload> Clone for Event<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            accepts_params: self.accepts_params,
            listeners: self.listeners.clone(),
        }
    }
}
