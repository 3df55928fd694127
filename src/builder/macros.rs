//! Macros for ergonomic event declaration.

/// Implement `Event` for payload types that always report the same
/// `EventType`.
///
/// # Example
///
/// ```
/// use tablefsm::core::{Event, EventType};
/// use tablefsm::impl_event;
///
/// const COIN: EventType = EventType::from_static("Coin");
/// const PUSH: EventType = EventType::from_static("Push");
///
/// struct CoinEvent {
///     name: String,
/// }
/// struct PushEvent;
///
/// impl_event! {
///     CoinEvent => COIN,
///     PushEvent => PUSH,
/// }
///
/// assert_eq!(PushEvent.event_type(), PUSH);
/// ```
#[macro_export]
macro_rules! impl_event {
    ($($ty:ty => $event_type:expr),+ $(,)?) => {
        $(
            impl $crate::core::Event for $ty {
                fn event_type(&self) -> $crate::core::EventType {
                    $event_type
                }
            }
        )+
    };
}
