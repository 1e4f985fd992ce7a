//! Common types for the shared crate
//!
//! Small enums and aliases used across the workspace.

use serde::{Deserialize, Serialize};

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Work queue a ticket belongs to, fixed at creation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentArea {
    Kitchen,
    Bar,
}

impl FulfillmentArea {
    /// Both areas, in display order
    pub const ALL: [FulfillmentArea; 2] = [FulfillmentArea::Kitchen, FulfillmentArea::Bar];

    /// The opposite queue (the kitchen/bar switcher in the header)
    pub fn other(self) -> FulfillmentArea {
        match self {
            FulfillmentArea::Kitchen => FulfillmentArea::Bar,
            FulfillmentArea::Bar => FulfillmentArea::Kitchen,
        }
    }
}

impl std::fmt::Display for FulfillmentArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FulfillmentArea::Kitchen => write!(f, "kitchen"),
            FulfillmentArea::Bar => write!(f, "bar"),
        }
    }
}

/// Kind of a catalog entry, decides which area its tickets route to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Food,
    Drink,
}

impl ItemKind {
    /// Fulfillment area this kind routes to: food goes to the kitchen,
    /// drinks go to the bar.
    pub fn area(self) -> FulfillmentArea {
        match self {
            ItemKind::Food => FulfillmentArea::Kitchen,
            ItemKind::Drink => FulfillmentArea::Bar,
        }
    }
}

/// Physical zone of a dining table, independent of fulfillment area
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SeatingZone {
    Inside,
    Outside,
}

/// Occupancy status of a dining table, maintained by the seating layer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Empty,
    Occupied,
    Waiting,
}
