//! Simple Cyclic Machine
//!
//! Three states visited in a loop with unconditional transitions.
//!
//! Run with: cargo run --example simple

use tablefsm::core::{Event, EventType};
use tablefsm::{StateMachine, StateMachineBuilder};
use tracing_subscriber::EnvFilter;

/// Event whose type is chosen at runtime.
struct Evt {
    t: EventType,
}

impl Event for Evt {
    fn event_type(&self) -> EventType {
        self.t.clone()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut fsm: StateMachine = StateMachineBuilder::new()
        .add_initial_state("s1".into())
        .add_states(["s2".into(), "s3".into()])
        .add_simple_transition("s1".into(), "e1".into(), "s2".into())
        .add_simple_transition("s2".into(), "e2".into(), "s3".into())
        .add_simple_transition("s3".into(), "e3".into(), "s1".into())
        .build()?;

    println!("{}", fsm.current_state());
    for t in ["e1", "e2", "e3"] {
        fsm.handle(&Evt { t: t.into() })?;
        println!("{}", fsm.current_state());
    }

    Ok(())
}
