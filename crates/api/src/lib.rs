pub mod dto;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod sessions;
pub mod state;

pub use routes::create_api_routes;
pub use sessions::SessionLimiter;
pub use state::AppState;
