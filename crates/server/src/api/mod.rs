pub mod handlers;
pub mod routes;
pub mod songs;

pub use routes::create_router;
