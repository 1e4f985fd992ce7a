//! OrderCart - composes a pending order from catalog entries
//!
//! One cart per ordering session. Lines accumulate quantities while the same
//! entry is added again and disappear when their quantity would drop below
//! one; `total` is always the plain sum over the current lines. Submission
//! partitions the lines by kind, hands one ticket per line to the sink, and
//! clears the cart - atomically from the caller's point of view.

use crate::source::SubmissionSink;
use serde::{Deserialize, Serialize};
use shared::error::BoardResult;
use shared::models::{MenuItem, SubmitReceipt, TableRef, Ticket};
use shared::types::ItemKind;
use shared::util;

/// One catalog entry plus quantity and note, prior to submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Snapshot of the catalog entry this line was built from
    pub item: MenuItem,
    /// Always >= 1; the line is dropped instead of reaching 0
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Order cart
#[derive(Debug, Clone, Default)]
pub struct OrderCart {
    lines: Vec<CartLine>,
}

impl OrderCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a catalog entry
    ///
    /// Merges into the existing line for the same entry id, otherwise
    /// appends a quantity-1 line. Always succeeds.
    pub fn add(&mut self, entry: &MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == entry.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                item: entry.clone(),
                quantity: 1,
                note: None,
            });
        }
    }

    /// Remove one unit of a catalog entry
    ///
    /// Drops the line entirely at quantity 1; no-op when the entry is not in
    /// the cart.
    pub fn remove(&mut self, entry_id: &str) {
        if let Some(idx) = self.lines.iter().position(|l| l.item.id == entry_id) {
            if self.lines[idx].quantity > 1 {
                self.lines[idx].quantity -= 1;
            } else {
                self.lines.remove(idx);
            }
        }
    }

    /// Attach or clear the free-text note on a line
    ///
    /// Returns whether a line was found.
    pub fn set_note(&mut self, entry_id: &str, note: Option<String>) -> bool {
        match self.lines.iter_mut().find(|l| l.item.id == entry_id) {
            Some(line) => {
                line.note = note;
                true
            }
            None => false,
        }
    }

    /// Sum of price x quantity over the current lines
    pub fn total(&self) -> i64 {
        self.lines
            .iter()
            .map(|l| l.item.price * i64::from(l.quantity))
            .sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Submit the cart as fulfillment tickets for `table`
    ///
    /// `Ok(None)` without touching anything when no table is set or the cart
    /// is empty. Otherwise builds one ticket per line - food lines route to
    /// the kitchen, drink lines to the bar - and hands the whole batch to
    /// the sink; the cart is cleared only once the sink has accepted, so
    /// either every line becomes a ticket or none does.
    pub fn submit(
        &mut self,
        table: Option<TableRef>,
        sink: &dyn SubmissionSink,
    ) -> BoardResult<Option<SubmitReceipt>> {
        let Some(table) = table else {
            return Ok(None);
        };
        if self.lines.is_empty() {
            return Ok(None);
        }

        let now = util::now_millis();
        let tickets: Vec<Ticket> = self
            .lines
            .iter()
            .map(|line| Ticket {
                id: uuid::Uuid::new_v4().to_string(),
                name: line.item.name.clone(),
                code: line.item.id.clone(),
                quantity: line.quantity,
                created_at: now,
                note: line.note.clone(),
                kind: line.item.kind,
                is_completed: false,
                table: table.clone(),
                area: line.item.kind.area(),
            })
            .collect();

        let kitchen = tickets.iter().filter(|t| t.kind == ItemKind::Food).count();
        let bar = tickets.len() - kitchen;

        sink.notify_submission(tickets)?;
        self.lines.clear();

        tracing::info!(table_id = %table.id, kitchen, bar, "order submitted");
        Ok(Some(SubmitReceipt {
            table,
            kitchen,
            bar,
        }))
    }
}

/// Filter catalog entries by category tag and a case-insensitive name query
///
/// `category: None` means all categories; an empty query matches everything.
pub fn filter_catalog(entries: &[MenuItem], category: Option<&str>, query: &str) -> Vec<MenuItem> {
    let query = query.to_lowercase();
    entries
        .iter()
        .filter(|e| category.is_none_or(|c| e.category == c))
        .filter(|e| query.is_empty() || e.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
