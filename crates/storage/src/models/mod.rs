pub mod ship;

pub use ship::{NewShip, Ship, ShipType};
