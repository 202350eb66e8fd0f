//! minilist-server: HTTP surface and persistence for the Mini App list
//!
//! Two data endpoints over Postgres:
//! - `GET /load` - a user's tasks and notes (lenient: read failures degrade
//!   to empty collections, never a non-200)
//! - `POST /save` - full transactional replace of a user's tasks and notes
//!   (strict: any failure aborts with 500 and leaves the old snapshot)

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use config::ServerConfig;
pub use http::server::{build_router, run_server};
pub use state::AppState;
