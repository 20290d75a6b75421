//! Core module — server configuration, state and error definitions
//!
//! - [`Config`] — environment-driven configuration
//! - [`ServerState`] — shared handler state (config + pool)
//! - [`Server`] — HTTP server lifecycle
//! - [`AppError`] — application error type

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use server::Server;
pub use state::ServerState;
