//! Params validation and threading.

use hookwire::{DispatchError, Event, Listener, Outcome, Registry, testing::Flag};

fn append(suffix: &'static str) -> impl Fn(Vec<String>) -> Vec<String> + Send + Sync + 'static {
    move |params: Vec<String>| params.into_iter().map(|p| p + suffix).collect()
}

#[test]
fn test_chain_threads_each_return_into_the_next() {
    let mut registry = Registry::new();
    registry.register_event(Event::with_params("chain"));
    registry
        .register_listener(Listener::unary("chain", append("-c")).with_priority(30))
        .unwrap();
    registry
        .register_listener(Listener::unary("chain", append("-a")).with_priority(10))
        .unwrap();
    registry
        .register_listener(Listener::unary("chain", append("-b")).with_priority(20))
        .unwrap();

    assert_eq!(
        registry.execute_event("chain", vec!["x".to_owned(), "y".to_owned()]),
        Ok(Outcome::Params(vec!["x-a-b-c".to_owned(), "y-a-b-c".to_owned()]))
    );
}

#[test]
fn test_listener_may_change_params_length() {
    let mut registry = Registry::<u32>::new();
    registry.register_event(Event::with_params("sum"));
    registry
        .register_listener(Listener::unary("sum", |p: Vec<u32>| -> Vec<u32> {
            vec![p.iter().sum(), 0]
        }))
        .unwrap();
    registry
        .register_listener(
            Listener::unary("sum", |mut p: Vec<u32>| {
                p.truncate(1);
                p
            })
            .with_priority(200),
        )
        .unwrap();

    assert_eq!(
        registry.execute_event("sum", vec![1, 2, 3, 4]),
        Ok(Outcome::Params(vec![10]))
    );
}

#[test]
fn test_params_event_without_listeners_returns_input() {
    let mut registry = Registry::<i64>::new();
    registry.register_event(Event::with_params("idle"));

    assert_eq!(
        registry.execute_event("idle", vec![-1, 2]),
        Ok(Outcome::Params(vec![-1, 2]))
    );
}

#[test]
fn test_plain_event_always_completes() {
    let mut registry = Registry::<u8>::new();
    registry.register_event(Event::new("quiet"));
    assert_eq!(registry.trigger("quiet"), Ok(Outcome::Completed));

    let flag = Flag::new();
    for priority in [3, 1, 2] {
        registry
            .register_listener(
                Listener::new("quiet")
                    .with_callback(flag.nullary())
                    .with_priority(priority),
            )
            .unwrap();
    }
    assert_eq!(registry.execute_event("quiet", vec![]), Ok(Outcome::Completed));
    assert!(flag.is_raised());
}

#[test]
fn test_validation_runs_before_any_listener() {
    let flag = Flag::new();
    let mut registry = Registry::<u8>::new();
    registry.register_event(Event::with_params("p"));
    registry.register_event(Event::new("n"));
    registry
        .register_listener(Listener::new("p").with_callback(flag.unary()))
        .unwrap();
    registry
        .register_listener(Listener::new("n").with_callback(flag.nullary()))
        .unwrap();

    assert_eq!(
        registry.execute_event("p", vec![]),
        Err(DispatchError::MissingParams { key: "p".into() })
    );
    assert_eq!(
        registry.execute_event("n", vec![1]),
        Err(DispatchError::UnexpectedParams { key: "n".into() })
    );
    assert!(!flag.is_raised());

    assert!(registry.execute_event("p", vec![1]).is_ok());
    assert!(registry.execute_event("n", vec![]).is_ok());
    assert!(flag.is_raised());
}

#[test]
fn test_register_listener_rejects_wrong_arity() {
    let mut registry = Registry::<u8>::new();
    registry.register_event(Event::with_params("p"));
    registry.register_event(Event::new("n"));

    assert_eq!(
        registry.register_listener(Listener::nullary("p", || {})),
        Err(DispatchError::ArityMismatch {
            key: "p".into(),
            accepts_params: true,
        })
    );
    assert_eq!(
        registry.register_listener(Listener::unary("n", |p: Vec<u8>| p)),
        Err(DispatchError::ArityMismatch {
            key: "n".into(),
            accepts_params: false,
        })
    );
    assert_eq!(registry.event("p").unwrap().listener_count(), 0);
    assert_eq!(registry.event("n").unwrap().listener_count(), 0);
}
