//! End-to-end scenarios driven through the public API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tablefsm::core::{Event, EventType, State};
use tablefsm::{impl_event, BuildError, ErrorKind, HandleError, StateMachine, StateMachineBuilder};
use thiserror::Error;

const S1: State = State::from_static("s1");
const S2: State = State::from_static("s2");
const S3: State = State::from_static("s3");
const S4: State = State::from_static("s4");

const ET1: EventType = EventType::from_static("et1");
const ET2: EventType = EventType::from_static("et2");
const ET3: EventType = EventType::from_static("et3");
const ET4: EventType = EventType::from_static("et4");

struct Evt1;
struct Evt2;
struct Evt3;
struct Evt4 {
    flag: bool,
}

impl_event! {
    Evt1 => ET1,
    Evt2 => ET2,
    Evt3 => ET3,
    Evt4 => ET4,
}

#[derive(Debug, Clone, PartialEq, Error)]
enum TestError {
    #[error("invalid event")]
    InvalidEvent,

    #[error("customized error")]
    Customized,
}

fn to(state: State) -> impl Fn(&dyn Event) -> Result<State, TestError> + Send + Sync {
    move |_: &dyn Event| Ok(state.clone())
}

// s1 -- et1 --> s2 -- et2 --> s3 -- et3 --> s4 -- et4 --> s1 or s2
fn four_state_machine() -> StateMachine<TestError> {
    StateMachineBuilder::<TestError>::new()
        .add_initial_state(S1)
        .add_states([S2, S3, S4])
        .add_transition(S1, ET1, to(S2), [S2])
        .add_transition(S2, ET2, to(S3), [S3])
        .add_transition(S3, ET3, to(S4), [S4])
        .add_transition(
            S4,
            ET4,
            |event: &dyn Event| {
                let evt = event
                    .downcast_ref::<Evt4>()
                    .ok_or(TestError::InvalidEvent)?;
                Ok(if evt.flag { S1 } else { S2 })
            },
            [S1, S2],
        )
        .build()
        .unwrap()
}

#[test]
fn four_state_cycle_branches_on_event_flag() {
    let mut fsm = four_state_machine();
    assert_eq!(fsm.current_state(), &S1);

    fsm.handle(&Evt1).unwrap();
    assert_eq!(fsm.current_state(), &S2);
    fsm.handle(&Evt2).unwrap();
    assert_eq!(fsm.current_state(), &S3);
    fsm.handle(&Evt3).unwrap();
    assert_eq!(fsm.current_state(), &S4);
    fsm.handle(&Evt4 { flag: false }).unwrap();
    assert_eq!(fsm.current_state(), &S2);

    fsm.handle(&Evt2).unwrap();
    assert_eq!(fsm.current_state(), &S3);
    fsm.handle(&Evt3).unwrap();
    assert_eq!(fsm.current_state(), &S4);
    fsm.handle(&Evt4 { flag: true }).unwrap();
    assert_eq!(fsm.current_state(), &S1);
}

#[test]
fn duplicate_initial_state_is_build_error() {
    let result = StateMachineBuilder::new()
        .add_initial_state(S1)
        .add_initial_state(S2)
        .add_states([S3, S4])
        .add_transition(S1, ET1, to(S2), [S2])
        .add_transition(S2, ET2, to(S3), [S3])
        .add_transition(S3, ET3, to(S4), [S4])
        .add_transition(S4, ET4, to(S1), [S1])
        .build();

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Build);
}

#[test]
fn missing_initial_state_is_build_error() {
    let result = StateMachineBuilder::new()
        .add_states([S1, S2, S3, S4])
        .add_transition(S1, ET1, to(S2), [S2])
        .add_transition(S2, ET2, to(S3), [S3])
        .add_transition(S3, ET3, to(S4), [S4])
        .add_transition(S4, ET4, to(S1), [S1])
        .build();

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Build);
}

#[test]
fn undefined_source_is_build_error() {
    let result = StateMachineBuilder::new()
        .add_initial_state(S1)
        .add_states([S2, S4])
        .add_transition(S1, ET1, to(S2), [S2])
        .add_transition(S2, ET2, to(S3), [S3])
        .add_transition(S3, ET3, to(S4), [S4])
        .build();

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Build);
    assert!(matches!(err, BuildError::UndeclaredSource { .. }));
}

#[test]
fn undefined_destination_is_build_error() {
    let result = StateMachineBuilder::new()
        .add_initial_state(S1)
        .add_states([S2, S3])
        .add_transition(S1, ET1, to(S2), [S2])
        .add_transition(S2, ET2, to(S3), [S4])
        .add_transition(S3, ET3, to(S4), [S4])
        .build();

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Build);
    assert!(matches!(err, BuildError::UndeclaredDestination { .. }));
}

#[test]
fn handler_returning_undeclared_state_is_invalid_transition() {
    let mut fsm = StateMachineBuilder::new()
        .add_initial_state(S1)
        .add_states([S2, S3, S4])
        .add_transition(S1, ET1, to(S3), [S2])
        .build()
        .unwrap();

    let err = fsm.handle(&Evt1).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidTransition);
    assert_eq!(fsm.current_state(), &S1);
}

#[test]
fn unbound_event_is_invalid_transition() {
    let mut fsm = four_state_machine();

    let err = fsm.handle(&Evt3).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidTransition);
    assert!(matches!(err, HandleError::NoTransition { .. }));
    assert_eq!(fsm.current_state(), &S1);
}

#[test]
fn customized_handler_error_is_returned_verbatim() {
    let mut fsm = StateMachineBuilder::new()
        .add_initial_state(S1)
        .add_states([S2, S3, S4])
        .add_transition(
            S1,
            ET1,
            |_: &dyn Event| Err(TestError::Customized),
            [S2],
        )
        .build()
        .unwrap();

    let err = fsm.handle(&Evt1).unwrap_err();

    assert_eq!(err, HandleError::Handler(TestError::Customized));
    assert_eq!(err.to_string(), "customized error");
    assert_eq!(fsm.current_state(), &S1);
}

#[test]
fn mismatched_payload_is_reported_by_handler() {
    // et4 is bound in s4, but the payload is not an Evt4
    struct Impostor;
    impl_event! {
        Impostor => ET4,
    }

    let mut fsm = four_state_machine();
    fsm.handle(&Evt1).unwrap();
    fsm.handle(&Evt2).unwrap();
    fsm.handle(&Evt3).unwrap();

    let err = fsm.handle(&Impostor).unwrap_err();

    assert_eq!(err.into_handler_error(), Some(TestError::InvalidEvent));
    assert_eq!(fsm.current_state(), &S4);
}

#[test]
fn redeclared_transition_runs_only_latest_handler() {
    let first_calls = Arc::new(AtomicUsize::new(0));
    let second_calls = Arc::new(AtomicUsize::new(0));

    let first = Arc::clone(&first_calls);
    let second = Arc::clone(&second_calls);

    let mut fsm: StateMachine<TestError> = StateMachineBuilder::new()
        .add_initial_state(S1)
        .add_states([S2, S3])
        .add_transition(
            S1,
            ET1,
            move |_: &dyn Event| {
                first.fetch_add(1, Ordering::SeqCst);
                Ok(S2)
            },
            [S2],
        )
        .add_transition(
            S1,
            ET1,
            move |_: &dyn Event| {
                second.fetch_add(1, Ordering::SeqCst);
                Ok(S3)
            },
            [S3],
        )
        .build()
        .unwrap();

    fsm.handle(&Evt1).unwrap();

    assert_eq!(fsm.current_state(), &S3);
    assert_eq!(first_calls.load(Ordering::SeqCst), 0);
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
}

mod turnstile {
    use super::*;

    const LOCKED: State = State::from_static("Locked");
    const UNLOCKED: State = State::from_static("Unlocked");
    const COIN: EventType = EventType::from_static("Coin");
    const PUSH: EventType = EventType::from_static("Push");

    struct CoinEvt {
        name: &'static str,
    }
    struct PushEvt {
        name: &'static str,
    }

    impl_event! {
        CoinEvt => COIN,
        PushEvt => PUSH,
    }

    fn turnstile() -> StateMachine<TestError> {
        StateMachineBuilder::<TestError>::new()
            .add_initial_state(LOCKED)
            .add_states([UNLOCKED])
            .add_transition(
                LOCKED,
                COIN,
                |event: &dyn Event| {
                    event
                        .downcast_ref::<CoinEvt>()
                        .map(|_| UNLOCKED)
                        .ok_or(TestError::InvalidEvent)
                },
                [UNLOCKED],
            )
            .add_transition(LOCKED, PUSH, to(LOCKED), [LOCKED])
            .add_transition(UNLOCKED, COIN, to(UNLOCKED), [UNLOCKED])
            .add_transition(
                UNLOCKED,
                PUSH,
                |event: &dyn Event| {
                    event
                        .downcast_ref::<PushEvt>()
                        .map(|_| LOCKED)
                        .ok_or(TestError::InvalidEvent)
                },
                [LOCKED],
            )
            .record_history()
            .build()
            .unwrap()
    }

    #[test]
    fn coin_and_push_sequence_ends_locked() {
        let mut turnstile = turnstile();

        turnstile.handle(&CoinEvt { name: "alice" }).unwrap();
        assert_eq!(turnstile.current_state(), &UNLOCKED);
        turnstile.handle(&PushEvt { name: "alice" }).unwrap();
        assert_eq!(turnstile.current_state(), &LOCKED);
        turnstile.handle(&PushEvt { name: "alice" }).unwrap();
        assert_eq!(turnstile.current_state(), &LOCKED);
        turnstile.handle(&CoinEvt { name: "bob" }).unwrap();
        assert_eq!(turnstile.current_state(), &UNLOCKED);
        turnstile.handle(&CoinEvt { name: "bob" }).unwrap();
        assert_eq!(turnstile.current_state(), &UNLOCKED);
        turnstile.handle(&PushEvt { name: "bob" }).unwrap();

        assert_eq!(turnstile.current_state(), &LOCKED);

        let history = turnstile.history().unwrap();
        assert_eq!(history.len(), 6);
        assert_eq!(
            history.path(),
            vec![&LOCKED, &UNLOCKED, &LOCKED, &LOCKED, &UNLOCKED, &UNLOCKED, &LOCKED]
        );
    }

    #[test]
    fn payload_names_are_visible_to_handlers() {
        let seen = CoinEvt { name: "carol" };
        let event: &dyn Event = &seen;

        assert_eq!(event.downcast_ref::<CoinEvt>().map(|c| c.name), Some("carol"));
        assert!(event.downcast_ref::<PushEvt>().is_none());

        let pushed = PushEvt { name: "dave" };
        let event: &dyn Event = &pushed;
        assert_eq!(event.downcast_ref::<PushEvt>().map(|p| p.name), Some("dave"));
    }
}
