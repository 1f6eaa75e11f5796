//! Basic State Machine
//!
//! This example demonstrates a table-driven machine with undo and redo.
//!
//! Key concepts:
//! - Enum tokens generated by `state_enum!` / `event_enum!`
//! - Transitions fired by named events
//! - Undo and redo along the recorded path
//!
//! Run with: cargo run --example basic_state_machine

use retrace::builder::ConfigBuilder;
use retrace::machine::StateMachine;
use retrace::{event_enum, state_enum};

state_enum! {
    enum ConnectionState {
        Disconnected,
        Connecting,
        Connected,
    }
}

event_enum! {
    enum ConnectionEvent {
        Dial,
        Established,
        HangUp,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Basic State Machine Example ===\n");

    let config = ConfigBuilder::new()
        .initial(ConnectionState::Disconnected)
        .transition(
            ConnectionState::Disconnected,
            ConnectionEvent::Dial,
            ConnectionState::Connecting,
        )
        .transition(
            ConnectionState::Connecting,
            ConnectionEvent::Established,
            ConnectionState::Connected,
        )
        .transition(
            ConnectionState::Connected,
            ConnectionEvent::HangUp,
            ConnectionState::Disconnected,
        )
        .build()
        .unwrap();

    let mut machine = StateMachine::new(config).unwrap();
    println!("Initial state: {:?}", machine.get_state());

    machine.trigger(&ConnectionEvent::Dial).unwrap();
    machine.trigger(&ConnectionEvent::Established).unwrap();
    println!("After dialing: {:?}", machine.get_state());

    match machine.trigger(&ConnectionEvent::Dial) {
        Ok(_) => println!("Unexpectedly dialed twice"),
        Err(e) => println!("Rejected: {}", e),
    }

    println!("\nUndo: {} -> {:?}", machine.undo(), machine.get_state());
    println!("Undo: {} -> {:?}", machine.undo(), machine.get_state());
    println!("Undo: {} -> {:?}", machine.undo(), machine.get_state());
    println!("Redo: {} -> {:?}", machine.redo(), machine.get_state());

    println!("\nHistory: {:?}", machine.history());
    println!("Redo buffer: {:?}", machine.redo_buffer());

    println!("\n=== Example Complete ===");
}
