pub mod handlers;
pub mod routes;
pub mod security;

pub use routes::create_app;
