// src/services/movie_query_service_tests.rs
//
// UNIT TESTS: Movie Query Service
//
// INVARIANTS TESTED:
// - A name filter with no match returns nothing without querying movies
// - Every entity bearing a filtered name contributes its id
// - Title and year pass through untouched
// - Translation never creates entities

#[cfg(test)]
mod query_tests {
    use std::sync::Arc;

    use crate::domain::{EntityId, FilterSpec, Genre, Movie, MovieQuery, NewMovie, TranslatedQuery};
    use crate::error::CatalogError;
    use crate::repositories::{MockCrewRepository, MockGenreRepository, MockMovieRepository};
    use crate::services::test_support::{services, BackendCall};
    use crate::services::MovieQueryService;

    #[tokio::test]
    async fn test_unmatched_name_short_circuits() {
        let mut crew_repo = MockCrewRepository::new();
        crew_repo.expect_list_by_name().returning(|_| Ok(Vec::new()));
        crew_repo.expect_create().times(0);

        let mut movie_repo = MockMovieRepository::new();
        movie_repo.expect_list().times(0);

        let service = MovieQueryService::new(
            Arc::new(movie_repo),
            Arc::new(crew_repo),
            Arc::new(MockGenreRepository::new()),
        );

        let filter = FilterSpec::new().with_director("Nobody");
        assert_eq!(
            service.translate(&filter).await.unwrap(),
            TranslatedQuery::EmptyResult
        );
        assert!(service.search(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_later_unmatched_name_discards_earlier_matches() {
        let env = services();
        env.catalog.seed_crew("Ridley Scott");

        let filter = FilterSpec::new()
            .with_director("Ridley Scott")
            .with_genre("Space Opera");
        let movies = env.queries.search(&filter).await.unwrap();

        assert!(movies.is_empty());
        assert_eq!(
            env.catalog
                .count_calls(|c| matches!(c, BackendCall::ListMovies(_))),
            0
        );
    }

    #[tokio::test]
    async fn test_genre_and_year_composition() {
        let mut genre_repo = MockGenreRepository::new();
        genre_repo
            .expect_list_by_name()
            .withf(|name| name == "Thriller")
            .returning(|_| {
                Ok(vec![
                    Genre::new(EntityId::from("3"), "Thriller"),
                    Genre::new(EntityId::from("7"), "Thriller"),
                ])
            });

        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_list()
            .withf(|query: &MovieQuery| {
                let pairs = query.to_query_pairs();
                pairs.contains(&("genre_ids", "3,7".to_string()))
                    && pairs.contains(&("release_year", "2000".to_string()))
                    && pairs.len() == 2
            })
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = MovieQueryService::new(
            Arc::new(movie_repo),
            Arc::new(MockCrewRepository::new()),
            Arc::new(genre_repo),
        );

        let filter = FilterSpec::new().with_genre("Thriller").with_year(2000);
        let translated = service.translate(&filter).await.unwrap();
        let query = translated.query().unwrap();

        assert_eq!(
            query.genre_ids,
            Some(vec![EntityId::from("3"), EntityId::from("7")])
        );
        assert_eq!(query.release_year, Some(2000));
        assert!(query.directed_by_ids.is_none());
        assert!(query.cast_ids.is_none());

        service.search(&filter).await.unwrap();
    }

    #[tokio::test]
    async fn test_all_same_named_people_match() {
        let env = services();
        let first = env.catalog.seed_crew("John Smith");
        let second = env.catalog.seed_crew("John Smith");
        env.catalog.seed_movie(NewMovie::new("By First", first.clone()));
        env.catalog.seed_movie(NewMovie::new("By Second", second.clone()));

        let filter = FilterSpec::new().with_director("John Smith");
        let translated = env.queries.translate(&filter).await.unwrap();
        assert_eq!(
            translated.query().and_then(|q| q.directed_by_ids.clone()),
            Some(vec![first, second])
        );

        let mut titles: Vec<String> = env
            .queries
            .search(&filter)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        titles.sort();
        assert_eq!(titles, vec!["By First", "By Second"]);
    }

    #[tokio::test]
    async fn test_title_passes_through_verbatim() {
        let env = services();

        let filter = FilterSpec::new().with_title("  the Matrix ");
        let translated = env.queries.translate(&filter).await.unwrap();

        assert_eq!(
            translated.query().and_then(|q| q.title.as_deref()),
            Some("  the Matrix ")
        );
        assert_eq!(env.catalog.calls(), Vec::<BackendCall>::new());
    }

    #[tokio::test]
    async fn test_unconstrained_filter_lists_everything() {
        let env = services();
        let director = env.catalog.seed_crew("Someone");
        env.catalog.seed_movie(NewMovie::new("A", director.clone()));
        env.catalog.seed_movie(NewMovie::new("B", director));

        let movies = env.queries.search(&FilterSpec::new()).await.unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(
            env.catalog.calls(),
            vec![BackendCall::ListMovies(MovieQuery::all())]
        );
    }

    #[tokio::test]
    async fn test_translation_never_creates() {
        let env = services();

        let filter = FilterSpec::new()
            .with_cast("Ghost")
            .with_genre("Nothing");
        env.queries.search(&filter).await.unwrap();

        assert_eq!(env.catalog.crew_count(), 0);
        assert_eq!(env.catalog.genre_count(), 0);
    }

    #[tokio::test]
    async fn test_get_movie_not_found() {
        let env = services();

        let err = env
            .queries
            .get_movie(&EntityId::from("missing"))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::NotFound));
    }

    #[tokio::test]
    async fn test_crew_details_splits_roles() {
        let env = services();
        let nolan = env.catalog.seed_crew("Christopher Nolan");
        let guy = env.catalog.seed_crew("Guy Pearce");

        let mut memento = NewMovie::new("Memento", nolan.clone());
        memento.cast = vec![guy.clone()];
        env.catalog.seed_movie(memento);

        let mut cameo = NewMovie::new("Cameo", guy.clone());
        cameo.cast = vec![nolan.clone()];
        env.catalog.seed_movie(cameo);

        let details = env.queries.crew_details(&nolan).await.unwrap();

        assert_eq!(details.member.name, "Christopher Nolan");
        let directed: Vec<&str> = details.directed.iter().map(|m| m.title.as_str()).collect();
        let starring: Vec<&str> = details.starring.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(directed, vec!["Memento"]);
        assert_eq!(starring, vec!["Cameo"]);
        assert!(details.directed.iter().all(|m: &Movie| m.involves(&nolan)));
    }

    #[tokio::test]
    async fn test_crew_details_unknown_id() {
        let env = services();

        let err = env
            .queries
            .crew_details(&EntityId::from("nobody"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(
            env.catalog
                .count_calls(|c| matches!(c, BackendCall::ListMovies(_))),
            0
        );
    }
}
