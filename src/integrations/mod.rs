// src/integrations/mod.rs
//
// External Integrations Module

pub mod catalog_api;

pub use catalog_api::{CatalogApiClient, CreatedEntity, Heartbeat};
