use axum::{Router, routing::get};
use storage::services::ShipCatalog;

use crate::features::ships::{
    self,
    handlers::{create_ship, list_ships},
};

pub fn router(catalog: ShipCatalog) -> Router {
    Router::new()
        // Collection endpoints answer on both `/rest/ships` and `/rest/ships/`
        .route("/rest/ships/", get(list_ships).post(create_ship))
        .nest("/rest/ships", ships::routes())
        .with_state(catalog)
}
