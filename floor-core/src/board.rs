//! TicketBoard - the authoritative ticket lifecycle store
//!
//! One process-scoped instance holds every ticket created for the session,
//! split into a kitchen lane and a bar lane. All consumers share the same
//! instance by reference and re-derive their views from it on every read.
//!
//! # Data Flow
//!
//! ```text
//! ingest(tickets) ──► lane (insertion order, ids unique store-wide)
//!                          ├─ pending(area)    - not completed, fresh elapsed
//!                          ├─ completed(area)  - completed, insertion order
//!                          ├─ all(area)        - the whole lane
//!                          ├─ by_table(id, area)
//!                          └─ stats(area)
//! complete(ids) / uncomplete(id) flip the completed flag; nothing else on a
//! ticket ever changes and no ticket is ever removed (replace excepted).
//! ```
//!
//! Each ticket cycles freely between `Pending` and `Completed`; re-entering
//! the current state is a no-op, not an error.

use parking_lot::RwLock;
use shared::error::{BoardError, BoardResult};
use shared::models::{LaneStats, Ticket, TicketView};
use shared::types::FulfillmentArea;
use shared::util;
use std::collections::HashSet;

#[derive(Debug, Default)]
struct Lanes {
    kitchen: Vec<Ticket>,
    bar: Vec<Ticket>,
    /// Ids ever ingested, across both lanes
    ids: HashSet<String>,
}

impl Lanes {
    fn lane(&self, area: FulfillmentArea) -> &Vec<Ticket> {
        match area {
            FulfillmentArea::Kitchen => &self.kitchen,
            FulfillmentArea::Bar => &self.bar,
        }
    }

    fn lane_mut(&mut self, area: FulfillmentArea) -> &mut Vec<Ticket> {
        match area {
            FulfillmentArea::Kitchen => &mut self.kitchen,
            FulfillmentArea::Bar => &mut self.bar,
        }
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Ticket> {
        self.kitchen
            .iter_mut()
            .chain(self.bar.iter_mut())
            .find(|t| t.id == id)
    }
}

/// Ticket lifecycle store, one lane per fulfillment area
///
/// Interior locking keeps every mutation atomic with respect to every read;
/// construct once and hand out `Arc` clones.
#[derive(Debug, Default)]
pub struct TicketBoard {
    inner: RwLock<Lanes>,
}

impl TicketBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append newly submitted tickets to their area lanes
    ///
    /// The whole batch is validated before anything is appended: an id that
    /// collides with the store or repeats within the batch rejects the call
    /// with [`BoardError::DuplicateTicketId`] and leaves the store unchanged.
    pub fn ingest(&self, tickets: Vec<Ticket>) -> BoardResult<usize> {
        let mut lanes = self.inner.write();

        let mut batch_ids = HashSet::with_capacity(tickets.len());
        for ticket in &tickets {
            if lanes.ids.contains(&ticket.id) || !batch_ids.insert(ticket.id.clone()) {
                tracing::warn!(ticket_id = %ticket.id, "rejected batch with duplicate ticket id");
                return Err(BoardError::DuplicateTicketId(ticket.id.clone()));
            }
        }

        let count = tickets.len();
        for ticket in tickets {
            lanes.ids.insert(ticket.id.clone());
            let area = ticket.area;
            lanes.lane_mut(area).push(ticket);
        }
        tracing::info!(count, "tickets ingested");
        Ok(count)
    }

    /// Pending tickets in `area`, oldest first, with fresh elapsed times
    pub fn pending(&self, area: FulfillmentArea) -> Vec<TicketView> {
        let now = util::now_millis();
        self.inner
            .read()
            .lane(area)
            .iter()
            .filter(|t| !t.is_completed)
            .map(|t| TicketView::at(t.clone(), now))
            .collect()
    }

    /// Completed tickets in `area`, insertion order
    pub fn completed(&self, area: FulfillmentArea) -> Vec<TicketView> {
        let now = util::now_millis();
        self.inner
            .read()
            .lane(area)
            .iter()
            .filter(|t| t.is_completed)
            .map(|t| TicketView::at(t.clone(), now))
            .collect()
    }

    /// Every ticket in `area` regardless of state, insertion order
    pub fn all(&self, area: FulfillmentArea) -> Vec<TicketView> {
        let now = util::now_millis();
        self.inner
            .read()
            .lane(area)
            .iter()
            .map(|t| TicketView::at(t.clone(), now))
            .collect()
    }

    /// Mark the given tickets completed
    ///
    /// Unknown and already-completed ids are silently skipped. Returns how
    /// many tickets actually transitioned.
    pub fn complete(&self, ids: &[String]) -> usize {
        let mut lanes = self.inner.write();
        let mut transitioned = 0;
        for id in ids {
            if let Some(ticket) = lanes.find_mut(id)
                && !ticket.is_completed
            {
                ticket.is_completed = true;
                transitioned += 1;
            }
        }
        if transitioned > 0 {
            tracing::info!(requested = ids.len(), transitioned, "tickets completed");
        }
        transitioned
    }

    /// Flip one completed ticket back to pending (the undo path)
    ///
    /// Returns whether the ticket transitioned; unknown or still-pending ids
    /// are a no-op.
    pub fn uncomplete(&self, id: &str) -> bool {
        let mut lanes = self.inner.write();
        match lanes.find_mut(id) {
            Some(ticket) if ticket.is_completed => {
                ticket.is_completed = false;
                tracing::info!(ticket_id = %id, "ticket returned to pending");
                true
            }
            _ => false,
        }
    }

    /// Pending tickets in `area` owned by one table, oldest first
    pub fn by_table(&self, table_id: &str, area: FulfillmentArea) -> Vec<TicketView> {
        let now = util::now_millis();
        self.inner
            .read()
            .lane(area)
            .iter()
            .filter(|t| !t.is_completed && t.table.id == table_id)
            .map(|t| TicketView::at(t.clone(), now))
            .collect()
    }

    /// Count of pending tickets in `area` owned by one table
    ///
    /// This is the rollup behind every table's pending badge; kitchen and
    /// bar counts are independent, never summed.
    pub fn pending_count_for(&self, table_id: &str, area: FulfillmentArea) -> usize {
        self.inner
            .read()
            .lane(area)
            .iter()
            .filter(|t| !t.is_completed && t.table.id == table_id)
            .count()
    }

    /// Queue statistics for one area
    pub fn stats(&self, area: FulfillmentArea) -> LaneStats {
        let lanes = self.inner.read();
        let lane = lanes.lane(area);
        let pending = lane.iter().filter(|t| !t.is_completed).count();
        let tables_in_service = lane
            .iter()
            .filter(|t| !t.is_completed)
            .map(|t| t.table.id.as_str())
            .collect::<HashSet<_>>()
            .len();
        LaneStats {
            pending,
            completed: lane.len() - pending,
            tables_in_service,
        }
    }

    /// Reset one lane to a fresh feed
    ///
    /// The data-loading layer calls this on (re)load. The other lane is
    /// untouched; id uniqueness is still enforced against it.
    pub fn replace(&self, area: FulfillmentArea, tickets: Vec<Ticket>) -> BoardResult<usize> {
        let mut lanes = self.inner.write();

        let mut batch_ids = HashSet::with_capacity(tickets.len());
        for ticket in &tickets {
            let held_elsewhere = lanes
                .lane(area.other())
                .iter()
                .any(|t| t.id == ticket.id);
            if held_elsewhere || !batch_ids.insert(ticket.id.clone()) {
                tracing::warn!(ticket_id = %ticket.id, "rejected reload with duplicate ticket id");
                return Err(BoardError::DuplicateTicketId(ticket.id.clone()));
            }
        }

        for old in lanes.lane(area).iter().map(|t| t.id.clone()).collect::<Vec<_>>() {
            lanes.ids.remove(&old);
        }
        let count = tickets.len();
        lanes.ids.extend(batch_ids);
        *lanes.lane_mut(area) = tickets;
        tracing::info!(%area, count, "lane reloaded");
        Ok(count)
    }
}

impl crate::source::SubmissionSink for TicketBoard {
    fn notify_submission(&self, tickets: Vec<Ticket>) -> BoardResult<usize> {
        self.ingest(tickets)
    }
}

#[cfg(test)]
mod tests;
