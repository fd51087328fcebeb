pub mod ships;
