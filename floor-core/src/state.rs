//! FloorState - process-scoped shared state
//!
//! One instance per process holds the single ticket board, the table
//! directory deriving from it, and the loaded catalog. Consumers get `Arc`
//! handles; cloning is shallow. Screens never load their own copy of
//! anything - they read through these handles, and the data-loading layer
//! refreshes them through the `reload_*` operations.

use parking_lot::RwLock;
use shared::error::LoadResult;
use shared::models::MenuItem;
use shared::types::FulfillmentArea;
use std::sync::Arc;

use crate::board::TicketBoard;
use crate::cart::OrderCart;
use crate::source::{CatalogSource, TableRegistry, TicketFeed};
use crate::tables::TableDirectory;

/// Shared floor state - construct once, pass by reference
#[derive(Debug)]
pub struct FloorState {
    board: Arc<TicketBoard>,
    tables: Arc<TableDirectory>,
    catalog: RwLock<Vec<MenuItem>>,
}

impl FloorState {
    /// Create empty state; every read returns empty until a reload runs
    pub fn new() -> Self {
        let board = Arc::new(TicketBoard::new());
        let tables = Arc::new(TableDirectory::new(board.clone()));
        Self {
            board,
            tables,
            catalog: RwLock::new(Vec::new()),
        }
    }

    /// The ticket board
    pub fn board(&self) -> Arc<TicketBoard> {
        self.board.clone()
    }

    /// The table directory
    pub fn tables(&self) -> Arc<TableDirectory> {
        self.tables.clone()
    }

    /// Loaded catalog entries (empty before the first reload)
    pub fn catalog(&self) -> Vec<MenuItem> {
        self.catalog.read().clone()
    }

    /// A fresh cart for a new ordering session
    pub fn new_cart(&self) -> OrderCart {
        OrderCart::new()
    }

    /// Refresh the catalog from its source
    pub async fn reload_catalog(&self, source: &dyn CatalogSource) -> LoadResult<usize> {
        let entries = source.load_catalog().await?;
        let count = entries.len();
        *self.catalog.write() = entries;
        tracing::info!(count, "catalog reloaded");
        Ok(count)
    }

    /// Refresh both ticket lanes from the intake feed
    ///
    /// Each lane is replaced wholesale; tickets completed locally since the
    /// last load are superseded by whatever the feed says now.
    pub async fn reload_tickets(&self, feed: &dyn TicketFeed) -> LoadResult<usize> {
        let mut total = 0;
        for area in FulfillmentArea::ALL {
            let tickets = feed.load_tickets(area).await?;
            total += self
                .board
                .replace(area, tickets)
                .map_err(|e| shared::error::LoadError::Unavailable(e.to_string()))?;
        }
        Ok(total)
    }

    /// Refresh the table registry
    pub async fn reload_tables(&self, registry: &dyn TableRegistry) -> LoadResult<usize> {
        let tables = registry.load_tables().await?;
        let count = tables.len();
        self.tables.replace(tables);
        Ok(count)
    }
}

impl Default for FloorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::error::{LoadError, LoadResult};
    use shared::models::{DiningTable, TableRef, Ticket};
    use shared::types::{ItemKind, SeatingZone, TableStatus};
    use shared::util;

    struct FixtureSource;

    #[async_trait]
    impl CatalogSource for FixtureSource {
        async fn load_catalog(&self) -> LoadResult<Vec<MenuItem>> {
            Ok(vec![MenuItem {
                id: "M01".to_string(),
                name: "Pho bo".to_string(),
                price: 50000,
                kind: ItemKind::Food,
                category: "main".to_string(),
                image: None,
            }])
        }
    }

    #[async_trait]
    impl TicketFeed for FixtureSource {
        async fn load_tickets(&self, area: FulfillmentArea) -> LoadResult<Vec<Ticket>> {
            let (id, kind) = match area {
                FulfillmentArea::Kitchen => ("k1", ItemKind::Food),
                FulfillmentArea::Bar => ("b1", ItemKind::Drink),
            };
            Ok(vec![Ticket {
                id: id.to_string(),
                name: "fixture".to_string(),
                code: "M01".to_string(),
                quantity: 1,
                created_at: util::now_millis(),
                note: None,
                kind,
                is_completed: false,
                table: TableRef::new("B01", "Bàn B01"),
                area,
            }])
        }
    }

    #[async_trait]
    impl TableRegistry for FixtureSource {
        async fn load_tables(&self) -> LoadResult<Vec<DiningTable>> {
            Ok(vec![DiningTable {
                id: "B01".to_string(),
                name: "Bàn B01".to_string(),
                zone: SeatingZone::Inside,
                status: TableStatus::Occupied,
                total_amount: 0,
                start_time: util::now_millis(),
            }])
        }
    }

    struct DownSource;

    #[async_trait]
    impl CatalogSource for DownSource {
        async fn load_catalog(&self) -> LoadResult<Vec<MenuItem>> {
            Err(LoadError::Unavailable("connection refused".to_string()))
        }
    }

    #[test]
    fn test_reads_are_empty_before_load() {
        let state = FloorState::new();
        assert!(state.catalog().is_empty());
        assert!(state.board().pending(FulfillmentArea::Kitchen).is_empty());
        assert!(
            state
                .tables()
                .tables_in_zone(SeatingZone::Inside, FulfillmentArea::Kitchen)
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_reload_populates_state() {
        let state = FloorState::new();
        let source = FixtureSource;

        assert_eq!(state.reload_catalog(&source).await.unwrap(), 1);
        assert_eq!(state.reload_tickets(&source).await.unwrap(), 2);
        assert_eq!(state.reload_tables(&source).await.unwrap(), 1);

        assert_eq!(state.catalog().len(), 1);
        assert_eq!(state.board().pending(FulfillmentArea::Kitchen).len(), 1);
        assert_eq!(state.board().pending(FulfillmentArea::Bar).len(), 1);
        assert_eq!(
            state
                .tables()
                .tables_in_zone(SeatingZone::Inside, FulfillmentArea::Kitchen)[0]
                .pending_items,
            1
        );
    }

    #[tokio::test]
    async fn test_reload_replaces_previous_feed() {
        let state = FloorState::new();
        let source = FixtureSource;

        state.reload_tickets(&source).await.unwrap();
        state.board().complete(&["k1".to_string()]);

        // A second load supersedes local state with the feed's view
        state.reload_tickets(&source).await.unwrap();
        let pending = state.board().pending(FulfillmentArea::Kitchen);
        assert_eq!(pending.len(), 1);
        assert!(!pending[0].ticket.is_completed);
    }

    #[tokio::test]
    async fn test_failed_reload_leaves_state_unchanged() {
        let state = FloorState::new();
        state.reload_catalog(&FixtureSource).await.unwrap();

        let err = state.reload_catalog(&DownSource).await;
        assert!(err.is_err());
        assert_eq!(state.catalog().len(), 1);
    }
}
