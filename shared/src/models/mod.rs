//! Data models
//!
//! Shared between the floor core and the presentation layer. Catalog entries
//! and dining tables are owned by external sources and read-only here;
//! tickets are owned by the board. All IDs are `String`.

pub mod dining_table;
pub mod menu_item;
pub mod ticket;

// Re-exports
pub use dining_table::*;
pub use menu_item::*;
pub use ticket::*;
