//! Application services: generation gateway, chat facade, and the
//! external collaborator interfaces.

pub mod billing;
pub mod chat;
pub mod generation;
pub mod ledger;

pub use billing::{ActionKind, CreditGate, GateDecision};
pub use chat::ChatService;
pub use generation::GenerationGateway;
pub use ledger::{LedgerEntry, LedgerStatus, TaskLedger};
