// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits between the CLI and the services
// - Translates between DTOs and domain entities
// - Holds no business rules of its own

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use state::AppState;
