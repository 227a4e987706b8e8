//! Payload bound for params elements.

/// A marker trait for values threaded through listeners as params.
///
/// Payloads must be `Send + Sync + 'static` so that events carrying them can
/// live in a registry shared between threads. Every such type is a payload.
///
/// # Example
///
/// ```rust
/// use hookwire_core::Payload;
///
/// fn assert_payload<T: Payload>() {}
///
/// assert_payload::<String>();
/// assert_payload::<(u32, &'static str)>();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an event payload",
    label = "must be `Send + Sync + 'static`",
    note = "Params are stored in events that may be shared across threads."
)]
pub trait Payload: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Payload for T {}
