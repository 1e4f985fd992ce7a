//! TableDirectory - per-table occupancy and pending-item rollups
//!
//! A pure read/derive layer over the externally maintained table registry
//! and the ticket board. Status, zone, and billing fields belong to the
//! seating layer; the only thing derived here is each table's pending-ticket
//! count for the fulfillment area currently in view.

use parking_lot::RwLock;
use shared::models::{DiningTable, TableView, TicketView};
use shared::types::{FulfillmentArea, SeatingZone, TableStatus};
use shared::util;
use std::sync::Arc;

use crate::board::TicketBoard;

/// Table registry view, rolled up against the shared ticket board
#[derive(Debug)]
pub struct TableDirectory {
    board: Arc<TicketBoard>,
    tables: RwLock<Vec<DiningTable>>,
}

impl TableDirectory {
    /// Create an empty directory deriving from `board`
    pub fn new(board: Arc<TicketBoard>) -> Self {
        Self {
            board,
            tables: RwLock::new(Vec::new()),
        }
    }

    /// Swap in a fresh registry snapshot from the seating layer
    pub fn replace(&self, tables: Vec<DiningTable>) {
        let count = tables.len();
        *self.tables.write() = tables;
        tracing::info!(count, "table registry reloaded");
    }

    /// Tables in `zone` with `status`, each enriched with its pending count
    /// for the fulfillment area in view
    pub fn tables_by_zone_and_status(
        &self,
        zone: SeatingZone,
        status: TableStatus,
        area: FulfillmentArea,
    ) -> Vec<TableView> {
        let now = util::now_millis();
        self.tables
            .read()
            .iter()
            .filter(|t| t.zone == zone && t.status == status)
            .map(|t| {
                let pending = self.board.pending_count_for(&t.id, area);
                TableView::at(t.clone(), pending, now)
            })
            .collect()
    }

    /// All tables in `zone` regardless of status
    pub fn tables_in_zone(&self, zone: SeatingZone, area: FulfillmentArea) -> Vec<TableView> {
        let now = util::now_millis();
        self.tables
            .read()
            .iter()
            .filter(|t| t.zone == zone)
            .map(|t| {
                let pending = self.board.pending_count_for(&t.id, area);
                TableView::at(t.clone(), pending, now)
            })
            .collect()
    }

    /// Open a table's pending-ticket detail
    ///
    /// Valid only when the table is registered and has at least one pending
    /// ticket in `area`; otherwise `None` and nothing changes.
    pub fn select_table(&self, table_id: &str, area: FulfillmentArea) -> Option<Vec<TicketView>> {
        if !self.tables.read().iter().any(|t| t.id == table_id) {
            return None;
        }
        let tickets = self.board.by_table(table_id, area);
        if tickets.is_empty() {
            None
        } else {
            Some(tickets)
        }
    }
}
