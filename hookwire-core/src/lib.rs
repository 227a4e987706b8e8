//! # hookwire-core
//!
//! Core types for the hookwire event dispatcher.
//!
//! This crate has minimal dependencies and holds everything an embedding
//! application needs to describe events and listeners, without pulling in
//! the registry implementation from `hookwire-std`.
//!
//! # Model
//!
//! - [`Event`]: a named registration point, flagged to take params or not.
//! - [`Listener`]: a [`Callback`] bound to an event key with a priority.
//!   Lower priorities run first.
//! - [`Dispatcher`]: registers events and listeners and executes events.
//!
//! # Params
//!
//! Events created with [`Event::with_params`] are executed with a non-empty
//! `Vec<T>` of [`Payload`] values. Each listener receives the params returned
//! by the previous one, and the execution yields the last listener's return
//! as [`Outcome::Params`]. Events without params yield [`Outcome::Completed`].
//!
//! # Error Types
//!
//! - [`DispatchError`] - Registration and execution failures, each naming the
//!   event key involved

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod callback;
mod dispatcher;
mod error;
mod event;
mod listener;
mod outcome;
mod payload;

// Re-exports
pub use callback::{Callback, NullaryCallback, UnaryCallback};
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, Result};
pub use event::Event;
pub use listener::{DEFAULT_PRIORITY, Listener};
pub use outcome::Outcome;
pub use payload::Payload;
