//! JSON Configuration
//!
//! This example loads a string-keyed machine from JSON, walks it with
//! undo and redo, then shows how a broken configuration is reported.
//!
//! Run with: cargo run --example json_config

use retrace::{Config, StateMachine};

const WIDGET: &str = r#"{
    "initial": "normal",
    "states": {
        "normal": { "transitions": { "go": "active" } },
        "active": { "transitions": { "stop": "normal", "pause": "paused" } },
        "paused": { "transitions": { "resume": "active" } }
    }
}"#;

const BROKEN: &str = r#"{
    "initial": "idle",
    "baseline": "home",
    "states": {
        "normal": { "transitions": { "go": "actve" } }
    }
}"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== JSON Configuration Example ===\n");

    let config: Config<String, String> = Config::from_json(WIDGET).unwrap();
    let mut machine = StateMachine::new(config).unwrap();

    println!("States handling 'resume': {:?}", machine.get_states_for("resume"));
    println!("Start: {}", machine.get_state());

    for event in ["go", "pause"] {
        let state = machine.trigger(event).unwrap();
        println!("trigger({event}) -> {state}");
    }

    for _ in 0..3 {
        let moved = machine.undo();
        println!("undo() -> {moved}, state {}", machine.get_state());
    }
    let moved = machine.redo();
    println!("redo() -> {moved}, state {}", machine.get_state());

    println!("\nJournal path: {:?}", machine.journal().path());

    println!("\nLoading a broken configuration:");
    let broken: Config<String, String> = Config::from_json(BROKEN).unwrap();
    if let Err(e) = StateMachine::new(broken) {
        for violation in e.violations() {
            println!("  - {violation}");
        }
    }

    println!("\n=== Example Complete ===");
}
