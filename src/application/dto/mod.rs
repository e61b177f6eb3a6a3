// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are output-friendly, serializable views
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{CrewMember, FilterSpec, Genre, Movie};
use crate::services::{CrewDetails, IngestionReport};

// ============================================================================
// MOVIE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub release_year: Option<i32>,
    pub audience_rating: Option<f64>,
    pub directed_by: String,
    pub cast: Vec<String>,
    pub genres: Vec<String>,
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            title: movie.title,
            description: movie.description,
            poster_url: movie.poster_url,
            release_year: movie.release_year,
            audience_rating: movie.audience_rating,
            directed_by: movie.directed_by.to_string(),
            cast: movie.cast.into_iter().map(|id| id.to_string()).collect(),
            genres: movie.genres.into_iter().map(|id| id.to_string()).collect(),
        }
    }
}

/// Name-based search input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieSearchDto {
    pub title: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
}

impl MovieSearchDto {
    pub fn to_filter(&self) -> FilterSpec {
        FilterSpec {
            title: self.title.clone(),
            director: self.director.clone(),
            cast: self.cast.clone(),
            genre: self.genre.clone(),
            year: self.year,
        }
    }
}

// ============================================================================
// CREW / GENRE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntityDto {
    pub id: String,
    pub name: String,
}

impl From<CrewMember> for NamedEntityDto {
    fn from(member: CrewMember) -> Self {
        Self {
            id: member.id.to_string(),
            name: member.name,
        }
    }
}

impl From<Genre> for NamedEntityDto {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id.to_string(),
            name: genre.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewDetailsDto {
    pub id: String,
    pub name: String,
    pub directed: Vec<MovieDto>,
    pub starring: Vec<MovieDto>,
}

impl From<CrewDetails> for CrewDetailsDto {
    fn from(details: CrewDetails) -> Self {
        Self {
            id: details.member.id.to_string(),
            name: details.member.name,
            directed: details.directed.into_iter().map(MovieDto::from).collect(),
            starring: details.starring.into_iter().map(MovieDto::from).collect(),
        }
    }
}

// ============================================================================
// INGESTION DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionReportDto {
    pub total_records: usize,
    pub movies_created: usize,
    pub crew_created: usize,
    pub crew_reused: usize,
    pub genres_created: usize,
    pub genres_reused: usize,
    pub movie_ids: Vec<String>,
    pub duration_ms: u64,
}

impl From<IngestionReport> for IngestionReportDto {
    fn from(report: IngestionReport) -> Self {
        Self {
            total_records: report.total,
            movies_created: report.movies_created,
            crew_created: report.crew_created,
            crew_reused: report.crew_reused,
            genres_created: report.genres_created,
            genres_reused: report.genres_reused,
            movie_ids: report.movie_ids.into_iter().map(|id| id.to_string()).collect(),
            duration_ms: report.duration_ms,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendStatusDto {
    pub base_url: String,
    pub message: String,
}
