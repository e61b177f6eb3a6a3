// src/application/commands/catalog_commands.rs
//
// Catalog browsing Command Handlers
//
// RULES:
// - Read-only; nothing here creates entities
// - Name filters go through MovieQueryService::search

use crate::application::{
    dto::{BackendStatusDto, CrewDetailsDto, MovieDto, MovieSearchDto, NamedEntityDto},
    state::AppState,
};
use crate::error::AppResult;

use super::parse_id;

/// Movies matching name-based filters; no filters lists every movie
pub async fn search_movies(state: &AppState, search: &MovieSearchDto) -> AppResult<Vec<MovieDto>> {
    let movies = state.query_service.search(&search.to_filter()).await?;
    Ok(movies.into_iter().map(MovieDto::from).collect())
}

pub async fn get_movie(state: &AppState, movie_id: &str) -> AppResult<MovieDto> {
    let id = parse_id(movie_id, "Movie")?;
    let movie = state.query_service.get_movie(&id).await?;
    Ok(MovieDto::from(movie))
}

pub async fn get_crew_details(state: &AppState, crew_id: &str) -> AppResult<CrewDetailsDto> {
    let id = parse_id(crew_id, "Crew member")?;
    let details = state.query_service.crew_details(&id).await?;
    Ok(CrewDetailsDto::from(details))
}

pub async fn list_genres(state: &AppState) -> AppResult<Vec<NamedEntityDto>> {
    let genres = state.query_service.list_genres().await?;
    Ok(genres.into_iter().map(NamedEntityDto::from).collect())
}

pub async fn list_crew(state: &AppState) -> AppResult<Vec<NamedEntityDto>> {
    let crew = state.query_service.list_crew().await?;
    Ok(crew.into_iter().map(NamedEntityDto::from).collect())
}

/// Probe the backend's heartbeat endpoint
pub async fn check_backend(state: &AppState) -> AppResult<BackendStatusDto> {
    let heartbeat = state.client.heartbeat().await?;
    Ok(BackendStatusDto {
        base_url: state.client.base_url().to_string(),
        message: heartbeat.message,
    })
}
