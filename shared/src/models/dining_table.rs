//! Dining Table Model

use crate::types::{SeatingZone, TableStatus, Timestamp};
use crate::util;
use serde::{Deserialize, Serialize};

/// Dining table entity (桌台)
///
/// Every field is maintained by the external reservation/seating layer; the
/// core reads tables to group and filter them, never writes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiningTable {
    pub id: String,
    pub name: String,
    pub zone: SeatingZone,
    pub status: TableStatus,
    /// Accumulated bill in the smallest currency unit
    pub total_amount: i64,
    /// Session start (Unix milliseconds)
    pub start_time: Timestamp,
}

/// Table read-model enriched with the pending-ticket rollup
///
/// `pending_items` counts the non-completed tickets owned by this table in
/// the fulfillment area currently in view; kitchen and bar are two
/// independent counts, never summed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableView {
    #[serde(flatten)]
    pub table: DiningTable,
    pub pending_items: usize,
    pub elapsed_secs: i64,
}

impl TableView {
    /// Build a view of `table` as of `now` (Unix milliseconds)
    pub fn at(table: DiningTable, pending_items: usize, now: Timestamp) -> Self {
        let elapsed_secs = util::elapsed_secs_since(table.start_time, now);
        Self {
            table,
            pending_items,
            elapsed_secs,
        }
    }
}
