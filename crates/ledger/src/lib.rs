//! In-memory guest ledger for a single wedding.
//!
//! The [`Ledger`] is the authoritative holder of the live record set.
//! Records are immutable once inserted; there is deliberately no update
//! operation. Nothing is persisted: process exit clears the ledger.

use std::collections::HashMap;

use uuid::Uuid;

pub use error::{FieldError, LedgerError};
pub use export::{ExportError, ExportFormat};
pub use guests::{Guest, GuestNew, Relationship, Side};

mod error;
pub mod export;
mod guests;
pub mod stats;

type ResultLedger<T> = Result<T, LedgerError>;

/// The live record set, keyed by guest id.
///
/// The ledger itself is synchronous and owns its map exclusively. A host
/// that handles requests in parallel must wrap it in a mutual-exclusion
/// guard; the server crate uses `Arc<RwLock<Ledger>>`.
#[derive(Debug, Default)]
pub struct Ledger {
    guests: HashMap<Uuid, Guest>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all live guests, newest first.
    ///
    /// Ties on the timestamp break on the id so the order is stable within
    /// a process run. The snapshot does not reflect later mutations.
    pub fn guests(&self) -> Vec<Guest> {
        let mut all: Vec<Guest> = self.guests.values().cloned().collect();
        all.sort_by(|a, b| {
            b.registered_at
                .cmp(&a.registered_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        all
    }

    /// Looks up one guest. Absent is not an error.
    pub fn guest(&self, id: Uuid) -> Option<&Guest> {
        self.guests.get(&id)
    }

    /// Validates and stores a candidate, returning the minted record.
    ///
    /// The id and timestamp are assigned here; the display timezone is
    /// derived from `locale`. On validation failure nothing is stored.
    pub fn add_guest(&mut self, candidate: GuestNew, locale: Option<&str>) -> ResultLedger<Guest> {
        let guest = Guest::new(candidate, locale)?;
        self.guests.insert(guest.id, guest.clone());
        Ok(guest)
    }

    /// Removes a guest, reporting whether a record was actually removed.
    /// Unknown ids are a normal outcome, not an error.
    pub fn remove_guest(&mut self, id: Uuid) -> bool {
        self.guests.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }
}
