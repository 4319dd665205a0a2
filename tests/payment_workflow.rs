//! Payment lifecycle driven end to end through the public API.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use transit::builder::{StateMachineBuilder, TransitionDefinition};
use transit::core::{BoxError, Outcome, Stage};
use transit::effects::StateMachine;
use transit::state_enum;
use transit::topology::Topology;

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
    enum PaymentEvent {
        PaymentSubmitted,
        BankAuthorization,
        BankRefusal,
        FundsMoved,
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Transfer {
    id: u64,
    amount: u64,
}

struct MoveFunds {
    ledger: Arc<AtomicU64>,
}

impl TransitionDefinition<Payment, PaymentEvent, Transfer> for MoveFunds {
    fn source(&self) -> Payment {
        Payment::Authorized
    }

    fn target(&self) -> Payment {
        Payment::Settled
    }

    fn events(&self) -> Vec<PaymentEvent> {
        vec![PaymentEvent::FundsMoved]
    }

    fn execute(&self, transfer: &Transfer) -> Result<(), BoxError> {
        if transfer.amount == 0 {
            return Err(format!("transfer {} has no amount", transfer.id).into());
        }
        self.ledger.fetch_add(transfer.amount, Ordering::SeqCst);
        Ok(())
    }
}

fn payment_machine(ledger: Arc<AtomicU64>) -> StateMachine<Payment, PaymentEvent, Transfer> {
    StateMachineBuilder::new()
        .initial(Payment::Created)
        .unwrap()
        .connect(Payment::Created, Payment::Pending, PaymentEvent::PaymentSubmitted)
        .connect(Payment::Pending, Payment::Authorized, PaymentEvent::BankAuthorization)
        .connect(Payment::Pending, Payment::Refused, PaymentEvent::BankRefusal)
        .define(MoveFunds { ledger })
        .build()
        .unwrap()
}

fn transfer(amount: u64) -> Transfer {
    Transfer { id: 7, amount }
}

#[test]
fn submitted_payment_becomes_pending() {
    let machine = payment_machine(Arc::new(AtomicU64::new(0)));

    let outcome = machine.on_event(
        &Payment::Created,
        &PaymentEvent::PaymentSubmitted,
        transfer(10),
    );

    assert_eq!(outcome, Outcome::Executed(Payment::Pending));
}

#[test]
fn funds_cannot_move_before_authorization() {
    let ledger = Arc::new(AtomicU64::new(0));
    let machine = payment_machine(Arc::clone(&ledger));

    let outcome = machine.on_event(&Payment::Pending, &PaymentEvent::FundsMoved, transfer(10));

    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(ledger.load(Ordering::SeqCst), 0);
}

#[test]
fn graph_queries_describe_the_lifecycle() {
    let machine = payment_machine(Arc::new(AtomicU64::new(0)));

    assert_eq!(
        machine.states(),
        &Payment::ALL.iter().copied().collect::<HashSet<_>>()
    );
    assert_eq!(
        machine.terminal_states(),
        &HashSet::from([Payment::Settled, Payment::Refused])
    );
    assert_eq!(
        machine.accepted_events(&Payment::Pending),
        HashSet::from([PaymentEvent::BankAuthorization, PaymentEvent::BankRefusal])
    );
    assert!(machine.allow_transition(&Payment::Pending, &Payment::Refused));
    assert!(!machine.allow_transition(&Payment::Created, &Payment::Settled));
    assert_eq!(
        machine.next_state(&Payment::Authorized, &PaymentEvent::FundsMoved),
        Some(&Payment::Settled)
    );
}

#[test]
fn settlement_runs_the_defined_action() {
    let ledger = Arc::new(AtomicU64::new(0));
    let machine = payment_machine(Arc::clone(&ledger));

    let outcome = machine.on_event(&Payment::Authorized, &PaymentEvent::FundsMoved, transfer(250));

    assert_eq!(outcome, Outcome::Executed(Payment::Settled));
    assert_eq!(ledger.load(Ordering::SeqCst), 250);
}

#[test]
fn failed_settlement_reports_the_action_error() {
    let machine = payment_machine(Arc::new(AtomicU64::new(0)));

    let error = machine
        .on_event(&Payment::Authorized, &PaymentEvent::FundsMoved, transfer(0))
        .into_result()
        .unwrap_err();

    assert_eq!(error.stage, Stage::Action);
    assert_eq!(error.from.as_deref(), Some("Authorized"));
    assert_eq!(error.to, "Settled");
    assert!(error.to_string().contains("transfer 7 has no amount"));
}

#[test]
fn audit_log_sees_every_executed_transition() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);

    let machine = StateMachineBuilder::<Payment, PaymentEvent, Transfer>::new()
        .initial(Payment::Created)
        .unwrap()
        .connect(Payment::Created, Payment::Pending, PaymentEvent::PaymentSubmitted)
        .connect(Payment::Pending, Payment::Refused, PaymentEvent::BankRefusal)
        .post_intercept(move |context, transfer| {
            sink.lock()
                .unwrap()
                .push((context.to.name(), transfer.id));
            Ok(())
        })
        .build()
        .unwrap();

    let mut state = Payment::Created;
    for event in [
        PaymentEvent::PaymentSubmitted,
        PaymentEvent::FundsMoved,
        PaymentEvent::BankRefusal,
    ] {
        state = machine
            .on_event(&state, &event, transfer(5))
            .state()
            .copied()
            .unwrap_or(state);
    }

    assert_eq!(state, Payment::Refused);
    assert_eq!(*log.lock().unwrap(), vec![("Pending", 7), ("Refused", 7)]);
}

#[test]
fn replaying_an_event_log_skips_invalid_events() {
    let machine = payment_machine(Arc::new(AtomicU64::new(0)));

    let events = [
        PaymentEvent::PaymentSubmitted,
        PaymentEvent::FundsMoved,
        PaymentEvent::BankAuthorization,
        PaymentEvent::BankRefusal,
        PaymentEvent::FundsMoved,
    ];

    assert_eq!(machine.reduce_state(&events), Payment::Settled);
}

#[test]
fn topology_survives_json_round_trip() {
    let machine = payment_machine(Arc::new(AtomicU64::new(0)));

    let json = serde_json::to_value(machine.topology()).unwrap();
    assert_eq!(json["initial"], "Created");
    assert_eq!(json["transitions"][0]["event"], "PaymentSubmitted");

    let topology: Topology<Payment, PaymentEvent> = serde_json::from_value(json).unwrap();
    let replica = StateMachineBuilder::<Payment, PaymentEvent, Transfer>::from_topology(topology)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(replica.topology(), machine.topology());
    assert_eq!(
        replica.on_event(&Payment::Authorized, &PaymentEvent::FundsMoved, transfer(0)),
        Outcome::Executed(Payment::Settled)
    );
}

#[tokio::test]
async fn shared_machine_drives_concurrent_payments() {
    let ledger = Arc::new(AtomicU64::new(0));
    let machine = Arc::new(payment_machine(Arc::clone(&ledger)));

    let handles: Vec<_> = (1..=10u64)
        .map(|id| {
            let machine = Arc::clone(&machine);
            tokio::spawn(async move {
                let lifecycle = [
                    PaymentEvent::PaymentSubmitted,
                    PaymentEvent::BankAuthorization,
                    PaymentEvent::FundsMoved,
                ];
                let mut state = *machine.initial_state();
                for event in lifecycle {
                    let outcome = machine.on_event(&state, &event, Transfer { id, amount: id });
                    state = *outcome.state().expect("transition should execute");
                }
                state
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), Payment::Settled);
    }
    assert_eq!(ledger.load(Ordering::SeqCst), (1..=10).sum::<u64>());
}
