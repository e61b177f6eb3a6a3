// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the CLI and the services
// - Commands accept DTOs or raw strings, return DTOs
// - Commands NEVER contain business logic

pub mod catalog_commands;
pub mod preset_commands;

pub use catalog_commands::*;
pub use preset_commands::*;

use crate::domain::{DomainError, EntityId};
use crate::error::{AppResult, CatalogError};

fn parse_id(raw: &str, what: &str) -> AppResult<EntityId> {
    let id = EntityId::from(raw.trim());
    if id.is_blank() {
        return Err(CatalogError::Validation(DomainError::InvariantViolation(format!(
            "{} id must not be empty",
            what
        ))));
    }
    Ok(id)
}

#[cfg(test)]
pub(crate) mod test_state {
    use std::sync::Arc;

    use crate::application::AppState;
    use crate::config::CatalogConfig;
    use crate::integrations::CatalogApiClient;
    use crate::services::test_support::InMemoryCatalog;

    pub fn state_over(catalog: Arc<InMemoryCatalog>) -> AppState {
        let config = CatalogConfig::default();
        let client = Arc::new(CatalogApiClient::new(&config).unwrap());
        AppState::with_repositories(
            config,
            client,
            catalog.clone(),
            catalog.clone(),
            catalog.clone(),
            catalog,
        )
    }
}
