use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewShip, Ship};

pub mod memory;
pub mod ship;

pub use memory::InMemoryShipRepository;
pub use ship::PgShipRepository;

/// Persistence operations the catalog relies on.
///
/// Implementations own id assignment and isolation between concurrent
/// callers; the catalog never caches what they return.
#[async_trait]
pub trait ShipStore: Send + Sync {
    /// Stores a new ship and returns it with its assigned id
    async fn insert(&self, ship: NewShip) -> Result<Ship>;

    /// Overwrites an existing ship. Fails with `NotFound` if the id is unknown.
    async fn save(&self, ship: Ship) -> Result<Ship>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Ship>>;

    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    /// Returns `false` when nothing was deleted
    async fn delete_by_id(&self, id: i64) -> Result<bool>;

    /// All ships ordered by id
    async fn find_all(&self) -> Result<Vec<Ship>>;
}
