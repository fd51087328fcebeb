pub mod handlers;
pub mod routes;

#[cfg(test)]
mod routes_test;

pub use routes::routes;
