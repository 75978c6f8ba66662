//! Stale-response protection for selection-driven fetches.
//!
//! The upstream behavior this replaces did not cancel in-flight fetches:
//! when the selected professional changed twice quickly, the older
//! response could land last and overwrite the newer professional's
//! blocked agenda. Here every selection change bumps a generation
//! counter, each fetch snapshots the generation it was issued under, and
//! a completed fetch is applied only while its snapshot is still current.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

/// Tracks which professional selection is current.
#[derive(Debug, Default)]
pub struct SelectionWatcher {
    generation: AtomicU64,
}

/// Snapshot of one selection, taken when a fetch is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    professional_id: i64,
}

impl FetchTicket {
    /// The professional the fetch was issued for.
    pub fn professional_id(&self) -> i64 {
        self.professional_id
    }
}

impl SelectionWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a selection change and returns the ticket a fetch for it
    /// must carry.
    ///
    /// Clearing the selection (`None`) still bumps the generation, so any
    /// in-flight fetch becomes stale, but yields no ticket: there is no
    /// agenda to fetch.
    pub fn select(&self, professional_id: Option<i64>) -> Option<FetchTicket> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        professional_id.map(|professional_id| FetchTicket {
            generation,
            professional_id,
        })
    }

    /// Whether the ticket still names the latest selection.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Passes `value` through when the ticket is current, otherwise
    /// discards it.
    pub fn accept<T>(&self, ticket: &FetchTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            debug!(
                professional_id = ticket.professional_id,
                "discarding stale agenda fetch"
            );
            None
        }
    }
}
