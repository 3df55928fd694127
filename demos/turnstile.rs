//! Turnstile
//!
//! The classic two-state turnstile: a coin unlocks it, a push locks it
//! again. Pushing a locked turnstile or paying an unlocked one changes
//! nothing.
//!
//! Key concepts:
//! - Handlers recover the concrete event payload with `downcast_ref`
//! - A payload of the wrong type is reported as the handler's own error
//! - Self-transitions are declared like any other destination
//!
//! Run with: RUST_LOG=debug cargo run --example turnstile

use tablefsm::core::{Event, EventType, State};
use tablefsm::{impl_event, StateMachineBuilder};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOCKED: State = State::from_static("Locked");
const UNLOCKED: State = State::from_static("Unlocked");

const COIN: EventType = EventType::from_static("Coin");
const PUSH: EventType = EventType::from_static("Push");

struct CoinEvt {
    name: String,
}

struct PushEvt {
    name: String,
}

impl_event! {
    CoinEvt => COIN,
    PushEvt => PUSH,
}

#[derive(Debug, Error)]
enum TurnstileError {
    #[error("invalid event: expected {expected}")]
    InvalidEvent { expected: EventType },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut turnstile = StateMachineBuilder::<TurnstileError>::new()
        .add_initial_state(LOCKED)
        .add_states([UNLOCKED])
        .add_transition(
            LOCKED,
            COIN,
            |event: &dyn Event| {
                let coin = event
                    .downcast_ref::<CoinEvt>()
                    .ok_or(TurnstileError::InvalidEvent { expected: COIN })?;
                info!("Unlocks the turnstile so that {} can push through.", coin.name);
                Ok(UNLOCKED)
            },
            [UNLOCKED],
        )
        .add_transition(
            LOCKED,
            PUSH,
            |_: &dyn Event| {
                info!("None");
                Ok(LOCKED)
            },
            [LOCKED],
        )
        .add_transition(
            UNLOCKED,
            COIN,
            |_: &dyn Event| {
                info!("None");
                Ok(UNLOCKED)
            },
            [UNLOCKED],
        )
        .add_transition(
            UNLOCKED,
            PUSH,
            |event: &dyn Event| {
                let push = event
                    .downcast_ref::<PushEvt>()
                    .ok_or(TurnstileError::InvalidEvent { expected: PUSH })?;
                info!("When {} has pushed through, locks the turnstile.", push.name);
                Ok(LOCKED)
            },
            [LOCKED],
        )
        .build()?;

    let events: Vec<Box<dyn Event>> = vec![
        Box::new(CoinEvt { name: "alice".into() }),
        Box::new(PushEvt { name: "alice".into() }),
        Box::new(PushEvt { name: "alice".into() }),
        Box::new(CoinEvt { name: "bob".into() }),
        Box::new(CoinEvt { name: "bob".into() }),
        Box::new(PushEvt { name: "bob".into() }),
    ];

    for event in &events {
        turnstile.handle(event.as_ref())?;
        println!("{} -> {}", event.event_type(), turnstile.current_state());
    }

    Ok(())
}
