//! Payra reward engine.
//!
//! Orchestration over two separately namespaced key-value stores:
//!
//! - [`ConfigStore`] owns the admin settings blob and merges persisted
//!   overrides onto hard-coded defaults on every read.
//! - [`LedgerStore`] owns the profile namespace: identity fields, the
//!   numeric balance, and the gating markers (completed quiz ids, last
//!   spin date).
//!
//! The quiz, spin, and withdrawal flows validate against the effective
//! settings, then hand back a *ticket* whose async `settle` applies the
//! balance mutation after the presentational delay. Dropping a ticket
//! before `settle` completes cancels the mutation, so a caller navigating
//! away never credits or debits after the fact.

pub mod clock;
pub mod config;
pub mod ledger;
pub mod quiz;
pub mod spin;
pub mod store;
pub mod withdraw;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ConfigStore;
pub use ledger::LedgerStore;
pub use store::{FileStore, KeyValue, MemStore};

#[cfg(test)]
mod flows_tests;
