//! Backend API surface the client calls through `api_server_url`.

pub mod route;

pub use route::{ApiRoute, HttpMethod};
