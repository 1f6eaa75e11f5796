//! Document Approval Workflow
//!
//! This example demonstrates a review workflow where an editor can step
//! back through decisions.
//!
//! Key concepts:
//! - Draft is the baseline: returning to it starts a fresh history
//! - Direct jumps with `change_state` keep pending redo entries
//! - A new event discards them
//! - The journal keeps the full audit trail
//!
//! Run with: cargo run --example document_workflow

use retrace::builder::ConfigBuilder;
use retrace::core::State;
use retrace::machine::StateMachine;
use retrace::{event_enum, state_enum};

state_enum! {
    enum DocState {
        Draft,
        Review,
        Approved,
        Published,
    }
}

event_enum! {
    enum DocEvent {
        Submit,
        Approve,
        Reject,
        Publish,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Document Workflow Example ===\n");

    let config = ConfigBuilder::new()
        .initial(DocState::Draft)
        .transition(DocState::Draft, DocEvent::Submit, DocState::Review)
        .transition(DocState::Review, DocEvent::Approve, DocState::Approved)
        .transition(DocState::Review, DocEvent::Reject, DocState::Draft)
        .transition(DocState::Approved, DocEvent::Publish, DocState::Published)
        .state(DocState::Published)
        .build()
        .unwrap();

    let mut doc = StateMachine::new(config).unwrap();

    doc.trigger(&DocEvent::Submit).unwrap();
    doc.trigger(&DocEvent::Approve).unwrap();
    println!("Approved: {}", doc.get_state().name());

    println!("States that can be rejected: {:?}", doc.get_states_for(&DocEvent::Reject));

    // the approver changes their mind
    doc.undo();
    println!("After undo: {}", doc.get_state().name());
    println!("Can redo: {}", doc.can_redo());

    // a manual jump keeps the redo entry
    doc.change_state(&DocState::Review).unwrap();
    println!("Jumped to {}; can redo: {}", doc.get_state().name(), doc.can_redo());

    // rejecting sends the document back to Draft, the baseline
    doc.trigger(&DocEvent::Reject).unwrap();
    println!(
        "Rejected: {}; history {:?}; can redo: {}",
        doc.get_state().name(),
        doc.history(),
        doc.can_redo()
    );

    println!("\nAudit trail:");
    for record in doc.journal().records() {
        println!(
            "  {} -> {} ({:?}) at {}",
            record.from.name(),
            record.to.name(),
            record.cause,
            record.timestamp.format("%H:%M:%S%.3f")
        );
    }

    println!("\n=== Example Complete ===");
}
