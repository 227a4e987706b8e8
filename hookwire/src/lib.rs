//! # hookwire - In-Process Event Dispatcher
//!
//! `hookwire` lets an application register named events, attach prioritized
//! listeners to them, and execute every listener of an event on demand.
//! Events may take params: each listener then receives the params returned
//! by the previous one, and the execution returns the final value.
//!
//! ## Quick Start
//!
//! ```rust
//! use hookwire::prelude::*;
//!
//! let mut registry = Registry::new();
//!
//! // An event without params: listeners are notified, nothing is returned.
//! registry.register_event(Event::new("user.action.logout"));
//! registry
//!     .register_listener(Listener::nullary("user.action.logout", || {}).with_priority(10))
//!     .unwrap();
//! assert_eq!(registry.trigger("user.action.logout"), Ok(Outcome::Completed));
//!
//! // An event with params: listeners transform the params in turn.
//! registry.register_event(Event::with_params("user.add.form.post"));
//! registry
//!     .register_listener(Listener::unary("user.add.form.post", |p: Vec<String>| -> Vec<String> {
//!         p.into_iter().map(|name| name.to_lowercase()).collect()
//!     }))
//!     .unwrap();
//! assert_eq!(
//!     registry.execute_event("user.add.form.post", vec!["Alice".to_owned()]),
//!     Ok(Outcome::Params(vec!["alice".to_owned()]))
//! );
//! ```
//!
//! ## Ordering
//!
//! Listeners run by ascending priority ([`DEFAULT_PRIORITY`] is 100).
//! Listeners with equal priority run in registration order.
//!
//! ## Errors
//!
//! Every operation reports failures as a [`DispatchError`] naming the event
//! key involved. See its variants for the exact conditions.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events and spans for registrations and executions.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use hookwire_core::{
    // Callbacks
    Callback,
    // Errors
    DispatchError,
    // Dispatcher trait
    Dispatcher,
    // Data model
    DEFAULT_PRIORITY,
    Event,
    Listener,
    NullaryCallback,
    Outcome,
    Payload,
    Result,
    UnaryCallback,
};

pub use hookwire_std::{Registry, RegistryBuilder, SharedRegistry};

/// Validation, ordering and sequential invocation of listeners.
pub mod delivery {
    pub use hookwire_std::delivery::{deliver, order, validate};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use hookwire_std::testing::*;
}

/// Prelude module - common imports for hookwire.
///
/// # Usage
///
/// ```rust
/// use hookwire::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Callback, DEFAULT_PRIORITY, DispatchError, Dispatcher, Event, Listener, Outcome, Registry,
        RegistryBuilder, SharedRegistry,
    };
}
