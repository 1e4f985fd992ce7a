//! External collaborator boundaries
//!
//! The core consumes these interfaces and never implements the loading side
//! itself; a deployment backs them with whatever transport or persistence it
//! chooses (the app these semantics come from used generated fixtures). The
//! loaders may be asynchronous; core reads called before a load has arrived
//! simply see empty collections. A load whose result arrives after the
//! consuming state has been dropped is discarded by virtue of the dropped
//! handle - the core keeps no timers and no retries.

use async_trait::async_trait;
use shared::error::{BoardResult, LoadResult};
use shared::models::{DiningTable, MenuItem, Ticket};
use shared::types::FulfillmentArea;

/// Catalog source - provides the selectable menu entries
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load_catalog(&self) -> LoadResult<Vec<MenuItem>>;
}

/// Ticket feed - initial/ongoing ticket population for one fulfillment area
///
/// Stands in for a real order-intake feed.
#[async_trait]
pub trait TicketFeed: Send + Sync {
    async fn load_tickets(&self, area: FulfillmentArea) -> LoadResult<Vec<Ticket>>;
}

/// Table registry - dining tables with externally maintained status,
/// seating zone, and billing fields
#[async_trait]
pub trait TableRegistry: Send + Sync {
    async fn load_tables(&self) -> LoadResult<Vec<DiningTable>>;
}

/// Submission sink - receives the ticket batch a cart submission produced
///
/// In this crate the sink is [`crate::TicketBoard`], which ingests the batch
/// directly; a networked deployment would route it to the kitchen/bar
/// stations instead.
pub trait SubmissionSink {
    /// Accept a submitted batch; returns how many tickets were taken
    fn notify_submission(&self, tickets: Vec<Ticket>) -> BoardResult<usize>;
}
