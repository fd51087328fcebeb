use axum::{Router, routing::get};
use storage::services::ShipCatalog;

use super::handlers::{
    count_ships, create_ship, delete_ship, get_ship, list_ships, update_ship,
};

pub fn routes() -> Router<ShipCatalog> {
    Router::new()
        .route("/", get(list_ships).post(create_ship))
        .route("/count", get(count_ships))
        .route("/:id", get(get_ship).post(update_ship).delete(delete_ship))
}
