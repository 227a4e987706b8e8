//! Testing utilities for hookwire.
//!
//! This module provides callbacks that make it easy to observe what a
//! registry did during execution.
//!
//! # Features
//!
//! - [`CallRecorder`]: records the order in which listeners ran
//! - [`CountingCallback`]: counts invocations
//! - [`Flag`]: a one-way "was called" tracker
//! - [`passthrough`]: a unary callback returning its params unchanged

use hookwire_core::{Callback, Payload};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

// ============================================================================
// Call Recorder
// ============================================================================

/// Records the identifiers of the callbacks it hands out, in call order.
///
/// # Example
///
/// ```rust
/// use hookwire_std::{Registry, testing::CallRecorder};
/// use hookwire_core::{Event, Listener};
///
/// let recorder = CallRecorder::new();
/// let mut registry = Registry::<u8>::new();
/// registry.register_event(Event::new("e"));
/// registry
///     .register_listener(Listener::new("e").with_callback(recorder.nullary(1)).with_priority(20))
///     .unwrap();
/// registry
///     .register_listener(Listener::new("e").with_callback(recorder.nullary(2)).with_priority(10))
///     .unwrap();
///
/// registry.trigger("e").unwrap();
/// assert_eq!(recorder.calls(), vec![2, 1]);
/// ```
#[derive(Clone, Default)]
pub struct CallRecorder {
    calls: Arc<Mutex<Vec<usize>>>,
}

impl CallRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero-argument callback that records `id` when called.
    pub fn nullary<T: Payload>(&self, id: usize) -> Callback<T> {
        let calls = self.calls.clone();
        Callback::nullary(move || record(&calls, id))
    }

    /// A unary callback that records `id` and returns its params unchanged.
    pub fn unary<T: Payload>(&self, id: usize) -> Callback<T> {
        let calls = self.calls.clone();
        Callback::unary(move |params: Vec<T>| {
            record(&calls, id);
            params
        })
    }

    /// Identifiers in the order their callbacks ran.
    pub fn calls(&self) -> Vec<usize> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

fn record(calls: &Mutex<Vec<usize>>, id: usize) {
    calls
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(id);
}

// ============================================================================
// Counting Callback
// ============================================================================

/// Counts how many times its callbacks were invoked.
#[derive(Clone, Default)]
pub struct CountingCallback {
    count: Arc<AtomicUsize>,
}

impl CountingCallback {
    /// Create a new counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero-argument callback that increments the counter.
    pub fn nullary<T: Payload>(&self) -> Callback<T> {
        let count = self.count.clone();
        Callback::nullary(move || {
            count.fetch_add(1, Ordering::SeqCst);
        })
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

// ============================================================================
// Flag
// ============================================================================

/// Becomes set the first time one of its callbacks runs.
#[derive(Clone, Default)]
pub struct Flag {
    raised: Arc<AtomicBool>,
}

impl Flag {
    /// Create a lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero-argument callback that raises the flag.
    pub fn nullary<T: Payload>(&self) -> Callback<T> {
        let raised = self.raised.clone();
        Callback::nullary(move || raised.store(true, Ordering::SeqCst))
    }

    /// A unary callback that raises the flag and hands its params on.
    pub fn unary<T: Payload>(&self) -> Callback<T> {
        let raised = self.raised.clone();
        Callback::unary(move |params: Vec<T>| {
            raised.store(true, Ordering::SeqCst);
            params
        })
    }

    /// Whether any callback of this flag has run.
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Pass-through
// ============================================================================

/// A unary callback that returns its params unchanged.
pub fn passthrough<T: Payload>() -> Callback<T> {
    Callback::unary(|params: Vec<T>| params)
}
