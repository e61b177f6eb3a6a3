pub mod client;

pub use client::{CatalogApiClient, CreatedEntity, Heartbeat};
