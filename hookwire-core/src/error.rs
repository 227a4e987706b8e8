//! Error types for hookwire.
//!
//! Every failure is surfaced to the caller as a [`DispatchError`] that names
//! the event key it concerns. Nothing is retried or swallowed.

use thiserror::Error;

/// Convenience alias for results produced by dispatcher operations.
pub type Result<T, E = DispatchError> = std::result::Result<T, E>;

/// Errors that can occur while registering listeners or executing events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No event is registered under the given key.
    #[error("event \"{key}\" is not registered")]
    UnknownEvent {
        /// The key that was looked up.
        key: String,
    },

    /// A listener scheduled to run has no callback bound.
    #[error("missing callback in listener for event \"{key}\"")]
    MissingCallback {
        /// Key of the event owning the listener.
        key: String,
    },

    /// The event accepts params but none were supplied.
    #[error("missing parameters for event \"{key}\"")]
    MissingParams {
        /// The executed event key.
        key: String,
    },

    /// Params were supplied for an event that does not accept them.
    #[error(
        "parameters were given for event \"{key}\", while they are not enabled for the event"
    )]
    UnexpectedParams {
        /// The executed event key.
        key: String,
    },

    /// A callback's arity disagrees with the event's params flag.
    #[error("callback arity does not match event \"{key}\" (accepts params: {accepts_params})")]
    ArityMismatch {
        /// Key of the event owning the listener.
        key: String,
        /// The params flag of the event.
        accepts_params: bool,
    },
}

impl DispatchError {
    /// The event key this error refers to.
    pub fn key(&self) -> &str {
        match self {
            DispatchError::UnknownEvent { key }
            | DispatchError::MissingCallback { key }
            | DispatchError::MissingParams { key }
            | DispatchError::UnexpectedParams { key }
            | DispatchError::ArityMismatch { key, .. } => key,
        }
    }
}
