//! Ticket Model
//!
//! A ticket is one line of ordered work, tracked from submission until it is
//! marked done on the kitchen or bar queue. Tickets are never deleted; the
//! only mutation after creation is the completed flag, which may flip back
//! via the undo path.

use crate::types::{FulfillmentArea, ItemKind, Timestamp};
use crate::util;
use serde::{Deserialize, Serialize};

/// Owning-table reference stamped on every ticket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableRef {
    pub id: String,
    pub name: String,
}

impl TableRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Ticket entity - the unit of kitchen/bar work
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub id: String,
    pub name: String,
    /// Product code shown on the ticket row (the catalog entry id)
    pub code: String,
    pub quantity: i32,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub kind: ItemKind,
    pub is_completed: bool,
    pub table: TableRef,
    /// Work queue, fixed at creation
    pub area: FulfillmentArea,
}

/// Ticket read-model with elapsed time computed at read time
///
/// `elapsed_secs` is only meaningful while the ticket is pending; it is as
/// fresh as the read that produced it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TicketView {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub elapsed_secs: i64,
}

impl TicketView {
    /// Build a view of `ticket` as of `now` (Unix milliseconds)
    pub fn at(ticket: Ticket, now: Timestamp) -> Self {
        let elapsed_secs = util::elapsed_secs_since(ticket.created_at, now);
        Self {
            ticket,
            elapsed_secs,
        }
    }
}

/// Result of a successful cart submission
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub table: TableRef,
    /// Tickets routed to the kitchen queue
    pub kitchen: usize,
    /// Tickets routed to the bar queue
    pub bar: usize,
}

/// Per-area queue statistics
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct LaneStats {
    pub pending: usize,
    pub completed: usize,
    /// Distinct tables with at least one pending ticket
    pub tables_in_service: usize,
}
