// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Services own the rules; repositories only move data. Services may emit
// events, repositories never do.

pub mod ingestion_service;
pub mod movie_query_service;
pub mod reference_resolver;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod movie_query_service_tests;

pub use reference_resolver::ReferenceResolver;

pub use ingestion_service::{IngestionProgress, IngestionReport, IngestionService};

pub use movie_query_service::{CrewDetails, MovieQueryService};
