//! Result of a successful event execution.

use crate::payload::Payload;

/// What an execution produced.
///
/// Events without params report [`Outcome::Completed`] once every listener
/// has run. Events with params report the params returned by the last
/// listener, or the original input when the event has no listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T: Payload> {
    /// All listeners ran; the event carries no params.
    Completed,
    /// All listeners ran; these are the final params.
    Params(Vec<T>),
}

impl<T: Payload> Outcome<T> {
    /// Whether this is the outcome of an event without params.
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }

    /// Borrow the final params, if any.
    pub fn params(&self) -> Option<&[T]> {
        match self {
            Outcome::Completed => None,
            Outcome::Params(params) => Some(params.as_slice()),
        }
    }

    /// Take the final params, if any.
    pub fn into_params(self) -> Option<Vec<T>> {
        match self {
            Outcome::Completed => None,
            Outcome::Params(params) => Some(params),
        }
    }
}
