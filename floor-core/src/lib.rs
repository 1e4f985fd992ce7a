//! Floor order core
//!
//! State-and-derivation logic for a restaurant floor: order line-items are
//! composed in a cart, submitted as fulfillment tickets onto the kitchen/bar
//! queues, tracked to completion (with undo), and rolled up into per-table
//! occupancy views. Rendering, navigation, and data loading live outside
//! this crate and talk to it through the traits in [`source`].
//!
//! # Architecture
//!
//! ```text
//! catalog entries → OrderCart → submit → TicketBoard (kitchen | bar lanes)
//!                                             ├─ pending / completed / all views
//!                                             ├─ by-table views ── Selection (batch complete)
//!                                             └─ TableDirectory (per-table rollups)
//! ```
//!
//! The board is the single source of truth for ticket state. Every consumer
//! re-derives from it on read; nothing caches a completion flag of its own.

pub mod board;
pub mod cart;
pub mod selection;
pub mod source;
pub mod state;
pub mod tables;

// Re-exports
pub use board::TicketBoard;
pub use cart::{CartLine, OrderCart, filter_catalog};
pub use selection::Selection;
pub use source::{CatalogSource, SubmissionSink, TableRegistry, TicketFeed};
pub use state::FloorState;
pub use tables::TableDirectory;

// Re-export shared types for convenience
pub use shared::error::{BoardError, BoardResult, LoadError, LoadResult};
pub use shared::models::{
    DiningTable, LaneStats, MenuItem, SubmitReceipt, TableRef, TableView, Ticket, TicketView,
};
pub use shared::types::{FulfillmentArea, ItemKind, SeatingZone, TableStatus};
