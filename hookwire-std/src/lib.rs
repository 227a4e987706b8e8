//! # hookwire-std
//!
//! Standard implementations for the hookwire event dispatcher.
//!
//! This crate provides:
//! - **Registry**: [`Registry`], the owned event registry implementing
//!   [`Dispatcher`](hookwire_core::Dispatcher), and [`RegistryBuilder`]
//! - **Shared access**: [`SharedRegistry`], a reader-writer locked handle
//! - **Delivery**: validation, priority ordering and sequential invocation
//! - **Testing**: recording and counting callbacks in [`testing`]
//!
//! Enable the `tracing` feature to emit `tracing` events for registrations
//! and executions.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use hookwire_core;

// Modules
pub mod delivery;
pub mod registry;
pub mod shared;
pub mod testing;

pub use registry::{Registry, RegistryBuilder};
pub use shared::SharedRegistry;
