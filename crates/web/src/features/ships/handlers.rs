use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::{
        filter::ShipQuery,
        ship::{CreateShipRequest, ShipResponse, UpdateShipRequest, parse_ship_id},
    },
    services::ShipCatalog,
};

use crate::error::{WebError, WebResult};

#[utoipa::path(
    get,
    path = "/rest/ships",
    params(ShipQuery),
    responses(
        (status = 200, description = "Page of ships matching the filters", body = Vec<ShipResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "ships"
)]
pub async fn list_ships(
    State(catalog): State<ShipCatalog>,
    query: Result<Query<ShipQuery>, QueryRejection>,
) -> WebResult<Response> {
    let Query(query) = query?;
    let (filter, order, page) = query.into_parts();

    let ships = catalog.list(&filter, order, page).await?;

    let response: Vec<ShipResponse> = ships.into_iter().map(ShipResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/rest/ships/count",
    params(ShipQuery),
    responses(
        (status = 200, description = "Number of ships matching the filters", body = usize),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "ships"
)]
pub async fn count_ships(
    State(catalog): State<ShipCatalog>,
    query: Result<Query<ShipQuery>, QueryRejection>,
) -> WebResult<Response> {
    let Query(query) = query?;

    let count = catalog.count(&query.into_filter()).await?;

    Ok(Json(count).into_response())
}

#[utoipa::path(
    get,
    path = "/rest/ships/{id}",
    params(
        ("id" = String, Path, description = "Ship id, a positive whole number")
    ),
    responses(
        (status = 200, description = "Ship found", body = ShipResponse),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Ship not found")
    ),
    tag = "ships"
)]
pub async fn get_ship(
    State(catalog): State<ShipCatalog>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let id = parse_ship_id(&id)?;

    let ship = catalog.get(id).await?.ok_or(WebError::NotFound)?;

    Ok(Json(ShipResponse::from(ship)).into_response())
}

#[utoipa::path(
    post,
    path = "/rest/ships",
    request_body = CreateShipRequest,
    responses(
        (status = 200, description = "Ship created", body = ShipResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "ships"
)]
pub async fn create_ship(
    State(catalog): State<ShipCatalog>,
    payload: Result<Json<CreateShipRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload?;

    let ship = catalog.create(req).await?;

    Ok(Json(ShipResponse::from(ship)).into_response())
}

#[utoipa::path(
    post,
    path = "/rest/ships/{id}",
    params(
        ("id" = String, Path, description = "Ship id, a positive whole number")
    ),
    request_body = UpdateShipRequest,
    responses(
        (status = 200, description = "Ship updated", body = ShipResponse),
        (status = 400, description = "Invalid id or validation error"),
        (status = 404, description = "Ship not found")
    ),
    tag = "ships"
)]
pub async fn update_ship(
    State(catalog): State<ShipCatalog>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateShipRequest>, JsonRejection>,
) -> WebResult<Response> {
    let id = parse_ship_id(&id)?;
    let Json(update_req) = payload?;

    let updated = catalog.update(id, update_req).await?;

    Ok(Json(ShipResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/rest/ships/{id}",
    params(
        ("id" = String, Path, description = "Ship id, a positive whole number")
    ),
    responses(
        (status = 200, description = "Ship deleted"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Ship not found")
    ),
    tag = "ships"
)]
pub async fn delete_ship(
    State(catalog): State<ShipCatalog>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let id = parse_ship_id(&id)?;

    catalog.delete(id).await?;

    Ok(StatusCode::OK.into_response())
}
