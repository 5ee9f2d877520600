//! Account backend: register/login plus a diagnostic user listing over a
//! single-table SQLite store.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod state;
pub mod users;

pub use config::AppConfig;
pub use state::AppState;
pub use users::store::UserStore;
