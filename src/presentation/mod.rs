//! HTTP presentation layer

pub mod controllers;
pub mod middleware;
pub mod models;
pub mod routes;


pub use controllers::AppState;
pub use routes::create_router;
