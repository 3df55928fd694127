//! Events fed to a state machine.
//!
//! The machine only ever inspects an event's `EventType`. Payloads are
//! caller-defined; handlers recover them with `downcast_ref`.

use super::state::opaque_id;
use std::any::Any;

opaque_id! {
    /// The kind of an event, used together with the current state to select
    /// a transition.
    EventType
}

/// Upcast helper so `dyn Event` can be downcast to its concrete payload.
///
/// Implemented for every `'static` type; callers never implement it.
#[doc(hidden)]
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Something that can be handled by a state machine.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::{Event, EventType};
///
/// const COIN: EventType = EventType::from_static("Coin");
///
/// struct CoinEvent {
///     name: String,
/// }
///
/// impl Event for CoinEvent {
///     fn event_type(&self) -> EventType {
///         COIN
///     }
/// }
///
/// let event: &dyn Event = &CoinEvent { name: "alice".into() };
/// assert_eq!(event.event_type(), COIN);
/// assert_eq!(event.downcast_ref::<CoinEvent>().map(|e| e.name.as_str()), Some("alice"));
/// ```
pub trait Event: AsAny + 'static {
    /// The type used to look up the transition for this event.
    fn event_type(&self) -> EventType;
}

impl dyn Event {
    /// Returns `true` if the concrete payload is a `T`.
    pub fn is<T: Event>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the concrete payload if it is a `T`.
    pub fn downcast_ref<T: Event>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
