//! End-to-end flow over the public API: load fixtures, compose and submit an
//! order, watch the queues and table rollups move, batch-complete through a
//! selection, and undo.

use async_trait::async_trait;
use floor_core::{
    CatalogSource, FloorState, FulfillmentArea, ItemKind, SeatingZone, Selection, TableRef,
    TableRegistry, TableStatus,
};
use shared::error::LoadResult;
use shared::models::{DiningTable, MenuItem};
use shared::util;

struct Fixtures;

#[async_trait]
impl CatalogSource for Fixtures {
    async fn load_catalog(&self) -> LoadResult<Vec<MenuItem>> {
        let entry = |id: &str, name: &str, price: i64, kind: ItemKind, category: &str| MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            price,
            kind,
            category: category.to_string(),
            image: None,
        };
        Ok(vec![
            entry("M01", "Phở bò", 50000, ItemKind::Food, "main"),
            entry("A02", "Gỏi cuốn", 30000, ItemKind::Food, "appetizer"),
            entry("D05", "Trà đá", 20000, ItemKind::Drink, "drinks"),
        ])
    }
}

#[async_trait]
impl TableRegistry for Fixtures {
    async fn load_tables(&self) -> LoadResult<Vec<DiningTable>> {
        let table = |id: &str, zone: SeatingZone, status: TableStatus| DiningTable {
            id: id.to_string(),
            name: format!("Bàn {}", id),
            zone,
            status,
            total_amount: 0,
            start_time: util::now_millis(),
        };
        Ok(vec![
            table("T01", SeatingZone::Inside, TableStatus::Occupied),
            table("T02", SeatingZone::Inside, TableStatus::Empty),
            table("T03", SeatingZone::Outside, TableStatus::Occupied),
        ])
    }
}

#[tokio::test]
async fn order_to_completion_flow() {
    let state = FloorState::new();
    state.reload_catalog(&Fixtures).await.unwrap();
    state.reload_tables(&Fixtures).await.unwrap();

    // Compose: 2x phở, 1x gỏi cuốn, 3x trà đá
    let catalog = state.catalog();
    let mut cart = state.new_cart();
    cart.add(&catalog[0]);
    cart.add(&catalog[0]);
    cart.add(&catalog[1]);
    cart.add(&catalog[2]);
    cart.add(&catalog[2]);
    cart.add(&catalog[2]);
    assert_eq!(cart.total(), 190000);

    // Submit to table T01; lines partition into kitchen and bar tickets
    let board = state.board();
    let receipt = cart
        .submit(Some(TableRef::new("T01", "Bàn T01")), board.as_ref())
        .unwrap()
        .expect("table set and cart non-empty");
    assert_eq!((receipt.kitchen, receipt.bar), (2, 1));
    assert!(cart.is_empty());

    // The occupied-tables view shows the pending badge for the viewed area
    let tables = state.tables();
    let inside = tables.tables_by_zone_and_status(
        SeatingZone::Inside,
        TableStatus::Occupied,
        FulfillmentArea::Kitchen,
    );
    assert_eq!(inside.len(), 1);
    assert_eq!(inside[0].table.id, "T01");
    assert_eq!(inside[0].pending_items, 2);

    // Open the table detail and batch-complete everything through a selection
    let detail = tables
        .select_table("T01", FulfillmentArea::Kitchen)
        .expect("T01 has pending kitchen tickets");
    let mut selection = Selection::new();
    let current: Vec<String> = detail.iter().map(|v| v.ticket.id.clone()).collect();
    selection.select_all(&current);
    assert!(selection.is_all_selected(&current));

    // One ticket gets completed from the plain pending list meanwhile
    board.complete(&current[..1]);

    // Revalidate before acting: the stale id drops out
    let refreshed: Vec<String> = board
        .by_table("T01", FulfillmentArea::Kitchen)
        .iter()
        .map(|v| v.ticket.id.clone())
        .collect();
    assert_eq!(selection.retain_valid(&refreshed), 1);
    board.complete(&selection.ids());
    selection.clear();

    assert!(board.pending(FulfillmentArea::Kitchen).is_empty());
    assert_eq!(board.stats(FulfillmentArea::Kitchen).completed, 2);
    assert_eq!(board.pending_count_for("T01", FulfillmentArea::Kitchen), 0);
    // Bar queue is untouched by kitchen completions
    assert_eq!(board.pending_count_for("T01", FulfillmentArea::Bar), 1);

    // A completed table no longer opens a kitchen detail view
    assert!(tables.select_table("T01", FulfillmentArea::Kitchen).is_none());

    // Undo brings one ticket back and the rollup follows immediately
    let done = board.completed(FulfillmentArea::Kitchen);
    assert!(board.uncomplete(&done[0].ticket.id));
    assert_eq!(board.pending_count_for("T01", FulfillmentArea::Kitchen), 1);
    assert!(tables.select_table("T01", FulfillmentArea::Kitchen).is_some());
}
