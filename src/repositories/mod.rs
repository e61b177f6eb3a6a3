// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories are DUMB data mappers over the backend collections
// - NO business logic
// - NO event emission
// - NO cross-repository calls

pub mod crew_repository;
pub mod genre_repository;
pub mod maintenance_repository;
pub mod movie_repository;

pub use crew_repository::{CrewRepository, HttpCrewRepository};
pub use genre_repository::{GenreRepository, HttpGenreRepository};
pub use maintenance_repository::{HttpMaintenanceRepository, MaintenanceRepository};
pub use movie_repository::{HttpMovieRepository, MovieRepository};

#[cfg(test)]
pub use crew_repository::MockCrewRepository;
#[cfg(test)]
pub use genre_repository::MockGenreRepository;
#[cfg(test)]
pub use maintenance_repository::MockMaintenanceRepository;
#[cfg(test)]
pub use movie_repository::MockMovieRepository;
