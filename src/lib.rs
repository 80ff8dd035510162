pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod state;

pub use application::services::*;
pub use config::*;
pub use domain::errors::{DomainError, DomainResult};
pub use state::AppState;
