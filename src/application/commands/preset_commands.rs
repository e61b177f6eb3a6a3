// src/application/commands/preset_commands.rs
//
// Preset Command Handlers - loading and clearing the catalog

use std::path::PathBuf;

use crate::application::{dto::IngestionReportDto, state::AppState};
use crate::error::AppResult;
use crate::presets::{load_preset_file, Preset};
use crate::services::IngestionProgress;

/// Where the records of a load come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetSource {
    /// A built-in preset, by name
    Builtin(String),
    /// A JSON array of preset records on disk
    File(PathBuf),
}

/// Clear the catalog and load a preset into it
pub async fn load_preset<P>(
    state: &AppState,
    source: &PresetSource,
    progress: P,
) -> AppResult<IngestionReportDto>
where
    P: FnMut(&IngestionProgress) + Send,
{
    let records = match source {
        PresetSource::Builtin(name) => name.parse::<Preset>()?.records()?,
        PresetSource::File(path) => load_preset_file(path)?,
    };

    let report = state.ingestion_service.ingest(&records, progress).await?;
    Ok(IngestionReportDto::from(report))
}

/// Delete every movie, crew member and genre
pub async fn clear_catalog<P>(state: &AppState, progress: P) -> AppResult<()>
where
    P: FnMut(&IngestionProgress) + Send,
{
    state.ingestion_service.reset_all(progress).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::test_state::state_over;
    use crate::error::CatalogError;
    use crate::services::test_support::InMemoryCatalog;

    #[tokio::test]
    async fn test_load_builtin_preset() {
        let catalog = InMemoryCatalog::new();
        let state = state_over(catalog.clone());

        let report = load_preset(&state, &PresetSource::Builtin("classics".to_string()), |_| {})
            .await
            .unwrap();

        assert_eq!(report.movies_created, 7);
        assert_eq!(catalog.movies().len(), 7);
        assert_eq!(catalog.crew_named("Keanu Reeves").len(), 1);
        assert_eq!(catalog.crew_named("Lana Wachowski").len(), 1);
        assert_eq!(catalog.genres_named("Science Fiction").len(), 1);
    }

    #[tokio::test]
    async fn test_loading_twice_gives_same_shape() {
        let catalog = InMemoryCatalog::new();
        let state = state_over(catalog.clone());
        let source = PresetSource::Builtin("test".to_string());

        load_preset(&state, &source, |_| {}).await.unwrap();
        let crew_after_first = catalog.crew_count();
        let genres_after_first = catalog.genre_count();
        load_preset(&state, &source, |_| {}).await.unwrap();

        assert_eq!(catalog.crew_count(), crew_after_first);
        assert_eq!(catalog.genre_count(), genres_after_first);
        assert_eq!(catalog.movies().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_preset_touches_nothing() {
        let catalog = InMemoryCatalog::new();
        let state = state_over(catalog.clone());

        let err = load_preset(&state, &PresetSource::Builtin("nope".to_string()), |_| {})
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Other(_)));
        assert!(catalog.calls().is_empty());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let catalog = InMemoryCatalog::new();
        let state = state_over(catalog.clone());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.json");
        std::fs::write(
            &path,
            r#"[{"title": "Alien", "director": "Ridley Scott", "genres": ["Horror"]}]"#,
        )
        .unwrap();

        let report = load_preset(&state, &PresetSource::File(path), |_| {})
            .await
            .unwrap();

        assert_eq!(report.movies_created, 1);
        assert!(catalog.movie_titled("Alien").is_some());
    }

    #[tokio::test]
    async fn test_clear_catalog() {
        let catalog = InMemoryCatalog::new();
        catalog.seed_genre("Drama");
        let state = state_over(catalog.clone());

        clear_catalog(&state, |_| {}).await.unwrap();

        assert_eq!(catalog.genre_count(), 0);
    }
}
