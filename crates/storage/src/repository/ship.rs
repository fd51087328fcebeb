use async_trait::async_trait;
use sqlx::PgPool;

use super::ShipStore;
use crate::error::{Result, StorageError};
use crate::models::{NewShip, Ship};

const SHIP_COLUMNS: &str =
    "id, name, planet, ship_type, prod_date, is_used, speed, crew_size, rating";

pub struct PgShipRepository {
    pool: PgPool,
}

impl PgShipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShipStore for PgShipRepository {
    async fn insert(&self, ship: NewShip) -> Result<Ship> {
        let query = format!(
            r#"
            INSERT INTO ships (name, planet, ship_type, prod_date, is_used, speed, crew_size, rating)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {SHIP_COLUMNS}
            "#
        );

        let stored = sqlx::query_as::<_, Ship>(&query)
            .bind(&ship.name)
            .bind(&ship.planet)
            .bind(ship.ship_type)
            .bind(ship.prod_date)
            .bind(ship.is_used)
            .bind(ship.speed)
            .bind(ship.crew_size)
            .bind(ship.rating)
            .fetch_one(&self.pool)
            .await?;

        Ok(stored)
    }

    async fn save(&self, ship: Ship) -> Result<Ship> {
        let query = format!(
            r#"
            UPDATE ships
            SET name = $2,
                planet = $3,
                ship_type = $4,
                prod_date = $5,
                is_used = $6,
                speed = $7,
                crew_size = $8,
                rating = $9
            WHERE id = $1
            RETURNING {SHIP_COLUMNS}
            "#
        );

        let stored = sqlx::query_as::<_, Ship>(&query)
            .bind(ship.id)
            .bind(&ship.name)
            .bind(&ship.planet)
            .bind(ship.ship_type)
            .bind(ship.prod_date)
            .bind(ship.is_used)
            .bind(ship.speed)
            .bind(ship.crew_size)
            .bind(ship.rating)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ship>> {
        let query = format!("SELECT {SHIP_COLUMNS} FROM ships WHERE id = $1");

        let ship = sqlx::query_as::<_, Ship>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(ship)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM ships WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM ships WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_all(&self) -> Result<Vec<Ship>> {
        let query = format!("SELECT {SHIP_COLUMNS} FROM ships ORDER BY id");

        let ships = sqlx::query_as::<_, Ship>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(ships)
    }
}
