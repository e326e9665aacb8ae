pub mod app_state;
pub mod controller;
pub mod http_server;
pub mod page;

pub use app_state::AppState;
pub use http_server::{router, serve};
