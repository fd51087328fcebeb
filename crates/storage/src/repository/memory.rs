use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ShipStore;
use crate::error::{Result, StorageError};
use crate::models::{NewShip, Ship};

/// Process-local store used when no database is configured
#[derive(Debug, Default)]
pub struct InMemoryShipRepository {
    ships: RwLock<BTreeMap<i64, Ship>>,
    last_id: AtomicI64,
}

impl InMemoryShipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShipStore for InMemoryShipRepository {
    async fn insert(&self, ship: NewShip) -> Result<Ship> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let ship = ship.with_id(id);

        self.ships.write().await.insert(id, ship.clone());

        Ok(ship)
    }

    async fn save(&self, ship: Ship) -> Result<Ship> {
        let mut ships = self.ships.write().await;
        let slot = ships.get_mut(&ship.id).ok_or(StorageError::NotFound)?;
        *slot = ship.clone();

        Ok(ship)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ship>> {
        Ok(self.ships.read().await.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.ships.read().await.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.ships.write().await.remove(&id).is_some())
    }

    async fn find_all(&self) -> Result<Vec<Ship>> {
        Ok(self.ships.read().await.values().cloned().collect())
    }
}
