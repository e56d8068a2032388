//! In-flight operation coordination.
//!
//! At most one async operation may be in flight per logical slot: one
//! upload per question id, the lab-results and identification upload
//! slots, and the coupon-validation slot. Slots are tracked in an explicit
//! map rather than ad hoc booleans, and every ticket carries the epoch it
//! was issued under: an abandon or reset bumps the epoch, so a
//! late-arriving result for a since-discarded session settles as stale and
//! is never applied.

use std::collections::HashSet;

use crate::error::EngineError;

/// Slot name for eligibility lab-result uploads.
pub const LAB_RESULTS_SLOT: &str = "lab_results";

/// Slot name for the identification document upload.
pub const IDENTIFICATION_SLOT: &str = "identification";

/// Slot name for coupon-code validation against the coupon service.
pub const COUPON_VALIDATION_SLOT: &str = "coupon_validation";

/// Issued by [`SlotTracker::begin`]; must be settled exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTicket {
    slot: String,
    epoch: u64,
}

impl SlotTicket {
    pub fn slot(&self) -> &str {
        &self.slot
    }
}

/// Outcome of settling a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// The ticket belongs to the live session; its result may be applied.
    Live,
    /// The session was reset after the ticket was issued; discard the
    /// result.
    Stale,
}

/// Tracks in-flight operations per slot for one wizard session.
#[derive(Debug, Default)]
pub struct SlotTracker {
    epoch: u64,
    in_flight: HashSet<String>,
}

impl SlotTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an operation is currently in flight for the slot. The UI
    /// disables the triggering control while busy.
    pub fn is_busy(&self, slot: &str) -> bool {
        self.in_flight.contains(slot)
    }

    /// Reserve the slot for one operation. Rejected while the slot is busy
    /// so the same slot can never run two operations concurrently.
    pub fn begin(&mut self, slot: &str) -> Result<SlotTicket, EngineError> {
        if !self.in_flight.insert(slot.to_string()) {
            return Err(EngineError::SlotBusy {
                slot: slot.to_string(),
            });
        }
        Ok(SlotTicket {
            slot: slot.to_string(),
            epoch: self.epoch,
        })
    }

    /// Release the ticket's slot and report whether its result is still
    /// applicable. Stale tickets (issued before a reset) release nothing —
    /// their slot reservation died with the old epoch.
    pub fn settle(&mut self, ticket: &SlotTicket) -> Settle {
        if ticket.epoch != self.epoch {
            tracing::debug!(slot = %ticket.slot, "discarding stale slot result");
            return Settle::Stale;
        }
        self.in_flight.remove(&ticket.slot);
        Settle::Live
    }

    /// Invalidate all outstanding tickets and clear every slot. Called on
    /// abandon and on full state reset.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.in_flight.clear();
    }
}
