//! Shared types for the floor order core
//!
//! Common types used across the workspace: data models, fulfillment/seating
//! enums, error types, and small time/format utilities.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{BoardError, BoardResult, LoadError, LoadResult};
pub use types::{FulfillmentArea, ItemKind, SeatingZone, TableStatus, Timestamp};
