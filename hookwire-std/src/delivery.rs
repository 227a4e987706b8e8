//! Sequential delivery of an event to its listeners.
//!
//! Delivery happens in three steps:
//!
//! 1. [`validate`] the supplied params against the event's params flag,
//! 2. [`order`] the listeners by ascending priority (stable),
//! 3. invoke each listener in turn, threading params through unary callbacks.
//!
//! Callback presence is checked when a listener's turn comes, not up front,
//! so listeners that already ran keep their side effects when a later one
//! fails.

use hookwire_core::{Callback, DispatchError, Event, Listener, Outcome, Payload, Result};

/// Check `params` against the event's params flag.
///
/// Only two combinations pass: params accepted and supplied, or neither.
pub fn validate<T: Payload>(event: &Event<T>, params: &[T]) -> Result<()> {
    match (event.accepts_params(), params.is_empty()) {
        (true, true) => Err(DispatchError::MissingParams {
            key: event.key().to_owned(),
        }),
        (false, false) => Err(DispatchError::UnexpectedParams {
            key: event.key().to_owned(),
        }),
        _ => Ok(()),
    }
}

/// Listeners sorted by ascending priority; ties keep insertion order.
pub fn order<T: Payload>(listeners: &[Listener<T>]) -> Vec<&Listener<T>> {
    let mut ordered: Vec<&Listener<T>> = listeners.iter().collect();
    // `sort_by_key` is stable.
    ordered.sort_by_key(|listener| listener.priority());
    ordered
}

/// Validate, order and run every listener of `event`.
pub fn deliver<T: Payload>(event: &Event<T>, params: Vec<T>) -> Result<Outcome<T>> {
    validate(event, &params)?;

    let mut params = params;
    for listener in order(event.listeners()) {
        let Some(callback) = listener.callback() else {
            return Err(DispatchError::MissingCallback {
                key: event.key().to_owned(),
            });
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(key = %event.key(), priority = listener.priority(), "invoking listener");

        match callback {
            Callback::Unary(inner) if event.accepts_params() => params = inner.call(params),
            Callback::Nullary(inner) if !event.accepts_params() => inner.call(),
            _ => {
                return Err(DispatchError::ArityMismatch {
                    key: event.key().to_owned(),
                    accepts_params: event.accepts_params(),
                });
            }
        }
    }

    if event.accepts_params() {
        Ok(Outcome::Params(params))
    } else {
        Ok(Outcome::Completed)
    }
}
