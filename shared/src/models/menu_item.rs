//! Menu Item Model

use crate::types::ItemKind;
use serde::{Deserialize, Serialize};

/// Menu item entity (catalog entry)
///
/// Owned by the external catalog source; the core only reads it. `price` is
/// in the smallest currency unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Price in the smallest currency unit
    pub price: i64,
    pub kind: ItemKind,
    /// Category tag used for menu filtering
    pub category: String,
    /// Image reference, opaque to the core
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
