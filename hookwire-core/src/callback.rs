//! # Callbacks
//!
//! The invocable part of a [`Listener`]. A callback comes in one of two
//! arities, chosen to match the params flag of the event it is bound to:
//!
//! - [`NullaryCallback`]: called with no arguments, its return is discarded.
//!   Used by events that do not accept params.
//! - [`UnaryCallback`]: called with the current params and returns the params
//!   handed to the next listener. Used by events that accept params.
//!
//! Both traits are implemented for plain closures, so most callers never
//! name them:
//!
//! ```rust
//! use hookwire_core::Callback;
//!
//! let ping: Callback<String> = Callback::nullary(|| println!("ping"));
//! let shout: Callback<String> = Callback::unary(|params: Vec<String>| -> Vec<String> {
//!     params.into_iter().map(|p| p.to_uppercase()).collect()
//! });
//!
//! assert!(!ping.is_unary());
//! assert!(shout.is_unary());
//! ```
//!
//! [`Listener`]: crate::Listener

use crate::payload::Payload;
use std::{fmt, sync::Arc};

/// A callback invoked without arguments.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `NullaryCallback`",
    label = "expected `Fn()`",
    note = "Events without params call their listeners with no arguments."
)]
pub trait NullaryCallback: Send + Sync + 'static {
    /// Invoke the callback.
    fn call(&self);
}

impl<F> NullaryCallback for F
where
    F: Fn() + Send + Sync + 'static,
{
    fn call(&self) {
        (self)()
    }
}

/// A callback that receives the current params and returns the next ones.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `UnaryCallback<{T}>`",
    label = "expected `Fn(Vec<{T}>) -> Vec<{T}>`",
    note = "Events with params pass them to each listener and keep its return value."
)]
pub trait UnaryCallback<T: Payload>: Send + Sync + 'static {
    /// Invoke the callback with `params`, returning the transformed params.
    fn call(&self, params: Vec<T>) -> Vec<T>;
}

impl<T, F> UnaryCallback<T> for F
where
    T: Payload,
    F: Fn(Vec<T>) -> Vec<T> + Send + Sync + 'static,
{
    fn call(&self, params: Vec<T>) -> Vec<T> {
        (self)(params)
    }
}

/// An arity-tagged callback.
///
/// The inner trait objects are reference counted, so cloning a callback (and
/// therefore a listener or an event) is cheap.
pub enum Callback<T: Payload> {
    /// Called with no arguments.
    Nullary(Arc<dyn NullaryCallback>),
    /// Called with the current params; returns the next params.
    Unary(Arc<dyn UnaryCallback<T>>),
}

impl<T: Payload> Callback<T> {
    /// Wrap a zero-argument callback.
    pub fn nullary<F: NullaryCallback>(callback: F) -> Self {
        Callback::Nullary(Arc::new(callback))
    }

    /// Wrap a params-transforming callback.
    pub fn unary<F: UnaryCallback<T>>(callback: F) -> Self {
        Callback::Unary(Arc::new(callback))
    }

    /// Whether this callback takes params.
    pub fn is_unary(&self) -> bool {
        matches!(self, Callback::Unary(_))
    }

    /// Whether this callback fits an event with the given params flag.
    pub fn fits(&self, accepts_params: bool) -> bool {
        self.is_unary() == accepts_params
    }
}

impl<T: Payload> Clone for Callback<T> {
    fn clone(&self) -> Self {
        match self {
            Callback::Nullary(inner) => Callback::Nullary(Arc::clone(inner)),
            Callback::Unary(inner) => Callback::Unary(Arc::clone(inner)),
        }
    }
}

impl<T: Payload> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::Nullary(_) => f.write_str("Callback::Nullary"),
            Callback::Unary(_) => f.write_str("Callback::Unary"),
        }
    }
}
