use std::sync::Arc;

use chrono::Datelike;
use tracing::{debug, info, warn};
use validator::{Validate, ValidationErrors};

use super::query;
use super::rating::{compute_rating, round2};
use crate::dto::common::PageRequest;
use crate::dto::filter::{ShipFilter, ShipOrder};
use crate::dto::ship::{CreateShipRequest, UpdateShipRequest, prod_date_from_millis};
use crate::error::{Result, StorageError};
use crate::models::{NewShip, Ship};
use crate::repository::ShipStore;

/// Entry point for every catalog operation.
///
/// Reads work on a fresh snapshot from the store on each call; mutations
/// validate their input and recompute the rating before anything is written.
#[derive(Clone)]
pub struct ShipCatalog {
    store: Arc<dyn ShipStore>,
}

fn check(request: &impl Validate) -> Result<()> {
    request.validate().map_err(|errors| {
        warn!(%errors, "Rejected ship payload");
        StorageError::Validation(errors)
    })
}

impl ShipCatalog {
    pub fn new(store: Arc<dyn ShipStore>) -> Self {
        Self { store }
    }

    /// One page of the ships matching `filter`, sorted by `order`
    pub async fn list(
        &self,
        filter: &ShipFilter,
        order: ShipOrder,
        page: PageRequest,
    ) -> Result<Vec<Ship>> {
        let ships = self.store.find_all().await?;
        let total = ships.len();

        let page_ships = query::run_query(ships, filter, order, page);
        debug!(
            total,
            returned = page_ships.len(),
            ?order,
            page_number = page.page_number,
            page_size = page.page_size,
            "Listed ships"
        );

        Ok(page_ships)
    }

    pub async fn count(&self, filter: &ShipFilter) -> Result<usize> {
        let ships = self.store.find_all().await?;
        let count = query::count_matching(&ships, filter);
        debug!(count, "Counted ships");

        Ok(count)
    }

    /// `None` when no ship has this id
    pub async fn get(&self, id: i64) -> Result<Option<Ship>> {
        let ship = self.store.find_by_id(id).await?;
        debug!(id, found = ship.is_some(), "Looked up ship");

        Ok(ship)
    }

    pub async fn create(&self, request: CreateShipRequest) -> Result<Ship> {
        check(&request)?;

        // `check` has already rejected every missing required field
        let CreateShipRequest {
            name: Some(name),
            planet: Some(planet),
            ship_type: Some(ship_type),
            prod_date: Some(prod_date),
            is_used,
            speed: Some(speed),
            crew_size: Some(crew_size),
        } = request
        else {
            return Err(StorageError::Validation(ValidationErrors::new()));
        };

        let prod_date = prod_date_from_millis(prod_date)?;
        let is_used = is_used.unwrap_or(false);
        let speed = round2(speed);
        let rating = compute_rating(speed, is_used, prod_date.year())?;

        let ship = NewShip {
            name,
            planet,
            ship_type,
            prod_date,
            is_used,
            speed,
            crew_size,
            rating,
        };

        let ship = self.store.insert(ship).await?;
        info!(id = ship.id, rating = %ship.rating, "Created ship");

        Ok(ship)
    }

    /// Applies the supplied fields onto the stored ship and re-rates it
    pub async fn update(&self, id: i64, request: UpdateShipRequest) -> Result<Ship> {
        let mut ship = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(StorageError::NotFound)?;

        check(&request)?;

        if let Some(name) = request.name {
            ship.name = name;
        }
        if let Some(planet) = request.planet {
            ship.planet = planet;
        }
        if let Some(ship_type) = request.ship_type {
            ship.ship_type = ship_type;
        }
        if let Some(millis) = request.prod_date {
            ship.prod_date = prod_date_from_millis(millis)?;
        }
        if let Some(is_used) = request.is_used {
            ship.is_used = is_used;
        }
        if let Some(speed) = request.speed {
            ship.speed = speed;
        }
        if let Some(crew_size) = request.crew_size {
            ship.crew_size = crew_size;
        }

        ship.speed = round2(ship.speed);
        ship.rating = compute_rating(ship.speed, ship.is_used, ship.prod_year())?;

        let ship = self.store.save(ship).await?;
        info!(id = ship.id, rating = %ship.rating, "Updated ship");

        Ok(ship)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.store.exists_by_id(id).await? || !self.store.delete_by_id(id).await? {
            return Err(StorageError::NotFound);
        }
        info!(id, "Deleted ship");

        Ok(())
    }
}
