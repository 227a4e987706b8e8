//! End-to-end scenarios for registering and executing events.

use hookwire::{DispatchError, Listener, Outcome};

mod common;
use common::{AFTER_POST, Tracker, listener, registry_with_event};

#[test]
fn test_events_with_listeners() {
    let tracker = Tracker::default();
    let mut registry = registry_with_event(false);

    registry
        .register_listener(listener(tracker.event_callback(), 50))
        .unwrap();
    registry
        .register_listener(listener(tracker.event_callback(), 10))
        .unwrap();

    assert!(!tracker.received());
    assert_eq!(registry.trigger(AFTER_POST), Ok(Outcome::Completed));
    assert!(tracker.received());
}

#[test]
fn test_events_with_params() {
    let tracker = Tracker::default();
    let mut registry = registry_with_event(true);
    registry
        .register_listener(listener(tracker.callback_with_parameter(), 50))
        .unwrap();

    assert!(!tracker.received());
    let executed = registry
        .execute_event(AFTER_POST, vec!["first parameter".to_owned()])
        .unwrap();

    assert_eq!(executed.params(), Some(&["first parameter".to_owned()][..]));
    assert!(tracker.received());
}

#[test]
fn test_events_with_params_modified_by_listener() {
    let tracker = Tracker::default();
    let mut registry = registry_with_event(true);
    registry
        .register_listener(listener(tracker.callback_replacing_word(), 30))
        .unwrap();

    assert!(!tracker.received());
    let executed = registry
        .execute_event(AFTER_POST, vec!["seek me".to_owned()])
        .unwrap();

    assert_eq!(
        executed.into_params(),
        Some(vec!["replaced by me".to_owned()])
    );
    assert!(tracker.received());
}

#[test]
fn test_listener_on_unregistered_event() {
    let tracker = Tracker::default();
    let mut registry = registry_with_event(false);

    let err = registry
        .register_listener(
            Listener::new("x")
                .with_callback(tracker.event_callback())
                .with_priority(25),
        )
        .unwrap_err();

    assert_eq!(err, DispatchError::UnknownEvent { key: "x".into() });
    assert_eq!(err.to_string(), "event \"x\" is not registered");
}

#[test]
fn test_listener_without_callback() {
    let mut registry = registry_with_event(false);
    registry
        .register_listener(Listener::new(AFTER_POST).with_priority(25))
        .unwrap();

    let err = registry.trigger(AFTER_POST).unwrap_err();

    assert_eq!(
        err,
        DispatchError::MissingCallback {
            key: AFTER_POST.into()
        }
    );
    assert_eq!(
        err.to_string(),
        "missing callback in listener for event \"test.event.after.post\""
    );
}

#[test]
fn test_params_given_while_not_enabled() {
    let tracker = Tracker::default();
    let mut registry = registry_with_event(false);
    registry
        .register_listener(listener(tracker.event_callback(), 35))
        .unwrap();

    let err = registry
        .execute_event(
            AFTER_POST,
            vec!["first parameter without setting".to_owned()],
        )
        .unwrap_err();

    assert_eq!(
        err,
        DispatchError::UnexpectedParams {
            key: AFTER_POST.into()
        }
    );
    assert!(!tracker.received());
}

#[test]
fn test_params_enabled_but_not_given() {
    let tracker = Tracker::default();
    let mut registry = registry_with_event(true);
    registry
        .register_listener(listener(tracker.callback_with_parameter(), 50))
        .unwrap();

    let err = registry.trigger(AFTER_POST).unwrap_err();

    assert_eq!(
        err,
        DispatchError::MissingParams {
            key: AFTER_POST.into()
        }
    );
    assert_eq!(
        err.to_string(),
        "missing parameters for event \"test.event.after.post\""
    );
    assert!(!tracker.received());
}
