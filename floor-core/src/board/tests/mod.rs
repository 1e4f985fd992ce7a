use super::*;
use shared::models::TableRef;
use shared::types::ItemKind;


fn make_ticket(id: &str, table_id: &str, area: FulfillmentArea) -> Ticket {
    let kind = match area {
        FulfillmentArea::Kitchen => ItemKind::Food,
        FulfillmentArea::Bar => ItemKind::Drink,
    };
    Ticket {
        id: id.to_string(),
        name: format!("Item {}", id),
        code: format!("P-{}", id),
        quantity: 1,
        created_at: util::now_millis(),
        note: None,
        kind,
        is_completed: false,
        table: TableRef::new(table_id, format!("Bàn {}", table_id)),
        area,
    }
}

fn board_with(tickets: Vec<Ticket>) -> TicketBoard {
    let board = TicketBoard::new();
    board.ingest(tickets).expect("fixture ingest");
    board
}

fn ids(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}
