#![allow(dead_code)]

use hookwire::{Callback, Event, Listener, Registry};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

// ============================================================================
// Test Event Keys
// ============================================================================

pub const AFTER_POST: &str = "test.event.after.post";

// ============================================================================
// Test Callbacks
// ============================================================================

/// Tracks whether any of its callbacks has been invoked.
#[derive(Clone, Default)]
pub struct Tracker {
    pub received: Arc<AtomicBool>,
}

impl Tracker {
    pub fn received(&self) -> bool {
        self.received.load(Ordering::SeqCst)
    }

    /// Callback for events without params.
    pub fn event_callback(&self) -> Callback<String> {
        let received = self.received.clone();
        Callback::nullary(move || received.store(true, Ordering::SeqCst))
    }

    /// Callback that checks the first param and hands the params on unchanged.
    pub fn callback_with_parameter(&self) -> Callback<String> {
        let received = self.received.clone();
        Callback::unary(move |params: Vec<String>| {
            received.store(true, Ordering::SeqCst);
            assert_eq!(
                params.first().map(String::as_str),
                Some("first parameter"),
                "wrong parameter in event callback"
            );
            params
        })
    }

    /// Callback that rewrites "seek me" in the first param.
    pub fn callback_replacing_word(&self) -> Callback<String> {
        let received = self.received.clone();
        Callback::unary(move |params: Vec<String>| {
            received.store(true, Ordering::SeqCst);
            let words = params.first().cloned().unwrap_or_default();
            vec![words.replace("seek me", "replaced by me")]
        })
    }
}

/// A registry holding one event under [`AFTER_POST`].
pub fn registry_with_event(accepts_params: bool) -> Registry<String> {
    let mut registry = Registry::new();
    let mut event = Event::new(AFTER_POST);
    event.set_accepts_params(accepts_params);
    registry.register_event(event);
    registry
}

pub fn listener(callback: Callback<String>, priority: i32) -> Listener<String> {
    Listener::new(AFTER_POST)
        .with_callback(callback)
        .with_priority(priority)
}
