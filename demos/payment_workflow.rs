//! Payment Workflow
//!
//! This example demonstrates a payment lifecycle driven by bank events.
//!
//! Key concepts:
//! - Payment states (Created -> Pending -> Authorized -> Settled | Refused)
//! - Actions that talk to a gateway through the signal
//! - Interceptors for validation and auditing
//! - Rejected events versus failed transitions
//!
//! Run with: cargo run --example payment_workflow

use std::sync::{Arc, Mutex};
use transit::builder::{StateMachineBuilder, TransitionDefinition};
use transit::core::{BoxError, Outcome};
use transit::state_enum;

state_enum! {
    enum Payment {
        Created,
        Pending,
        Authorized,
        Settled,
        Refused,
    }
}

state_enum! {
    enum BankEvent {
        PaymentSubmitted,
        BankAuthorization,
        BankRefusal,
        FundsMoved,
    }
}

// Signal handed to every action
#[derive(Clone, Debug)]
struct Transfer {
    id: u64,
    amount_cents: u64,
    gateway: Arc<Mutex<Gateway>>,
}

// Mock gateway
#[derive(Debug, Default)]
struct Gateway {
    settled_cents: u64,
    notifications: Vec<String>,
}

impl Gateway {
    fn notify(&mut self, id: u64, message: &str) {
        let notification = format!("Payment {}: {}", id, message);
        println!("  [Notification] {}", notification);
        self.notifications.push(notification);
    }
}

struct Settle;

impl TransitionDefinition<Payment, BankEvent, Transfer> for Settle {
    fn source(&self) -> Payment {
        Payment::Authorized
    }

    fn target(&self) -> Payment {
        Payment::Settled
    }

    fn events(&self) -> Vec<BankEvent> {
        vec![BankEvent::FundsMoved]
    }

    fn execute(&self, transfer: &Transfer) -> Result<(), BoxError> {
        let mut gateway = transfer.gateway.lock().map_err(|e| e.to_string())?;
        gateway.settled_cents += transfer.amount_cents;
        gateway.notify(transfer.id, "funds moved");
        Ok(())
    }
}

fn submit(transfer: &Transfer) -> Result<(), BoxError> {
    let mut gateway = transfer.gateway.lock().map_err(|e| e.to_string())?;
    gateway.notify(transfer.id, "submitted to bank");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Payment Workflow ===\n");

    let machine = StateMachineBuilder::<Payment, BankEvent, Transfer>::new()
        .initial(Payment::Created)?
        .connect_with(Payment::Created, Payment::Pending, BankEvent::PaymentSubmitted, submit)
        .connect(Payment::Pending, Payment::Authorized, BankEvent::BankAuthorization)
        .connect(Payment::Pending, Payment::Refused, BankEvent::BankRefusal)
        .define(Settle)
        .intercept(|_, transfer| {
            if transfer.amount_cents == 0 {
                return Err(format!("payment {} has no amount", transfer.id).into());
            }
            Ok(transfer)
        })
        .post_intercept(|context, transfer| {
            println!("  [Audit] {} {:?} -> {:?}", transfer.id, context.from, context.to);
            Ok(())
        })
        .build()?;

    println!("Payment state machine created");
    println!("Terminal states: {:?}\n", machine.terminal_states());

    let gateway = Arc::new(Mutex::new(Gateway::default()));
    let transfer = Transfer {
        id: 42,
        amount_cents: 14_999,
        gateway: Arc::clone(&gateway),
    };

    let mut state = *machine.initial_state();
    for event in [
        BankEvent::PaymentSubmitted,
        BankEvent::FundsMoved,
        BankEvent::BankAuthorization,
        BankEvent::FundsMoved,
    ] {
        println!("{:?} in {:?}:", event, state);
        match machine.on_event(&state, &event, transfer.clone()) {
            Outcome::Executed(next) => state = next,
            Outcome::Rejected => println!("  rejected, still {:?}", state),
            Outcome::Failed(error) => println!("  Error: {}", error),
        }
        println!();
    }

    println!("Empty payment:");
    let empty = Transfer {
        amount_cents: 0,
        ..transfer.clone()
    };
    if let Outcome::Failed(error) = machine.on_event(&Payment::Created, &BankEvent::PaymentSubmitted, empty) {
        println!("  Error: {}\n", error);
    }

    let gateway = gateway.lock().map_err(|e| e.to_string())?;
    println!("Final state: {:?}", state);
    println!("Settled: ${:.2}", gateway.settled_cents as f64 / 100.0);
    println!("Total notifications sent: {}", gateway.notifications.len());

    println!("\nKey Takeaways:");
    println!("- Only declared transitions are executed");
    println!("- Out-of-order bank events are rejected, not errors");
    println!("- Interceptors validate every payment before its action runs");

    println!("\n=== Example Complete ===");
    Ok(())
}
