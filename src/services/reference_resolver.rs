// src/services/reference_resolver.rs
//
// Reference Resolver
//
// Maps a display name (director, cast member, genre) to the id of the
// matching backend entity, creating the entity on first use.
//
// RULES:
// - Every call performs a fresh exact-name lookup; nothing is cached
// - One or more matches: the first one returned by the backend wins
// - No match: exactly one create with that name
// - Backend failures are wrapped in ResolutionFailed, never retried
// - Blank names are a caller error and never reach the backend

use std::sync::Arc;

use crate::domain::{DomainError, ReferenceKind, ResolvedReference};
use crate::error::{AppResult, CatalogError};
use crate::events::{CrewMemberCreated, EventBus, GenreCreated, ReferenceReused};
use crate::repositories::{CrewRepository, GenreRepository};

pub struct ReferenceResolver {
    crew_repo: Arc<dyn CrewRepository>,
    genre_repo: Arc<dyn GenreRepository>,
    event_bus: Arc<EventBus>,
}

impl ReferenceResolver {
    pub fn new(
        crew_repo: Arc<dyn CrewRepository>,
        genre_repo: Arc<dyn GenreRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            crew_repo,
            genre_repo,
            event_bus,
        }
    }

    /// Resolve `name` within the collection for `kind`, creating it if absent
    pub async fn resolve(&self, kind: ReferenceKind, name: &str) -> AppResult<ResolvedReference> {
        if name.trim().is_empty() {
            return Err(CatalogError::Validation(DomainError::EmptyName { kind }));
        }

        let resolved = self
            .resolve_internal(kind, name)
            .await
            .map_err(|e| CatalogError::resolution_failed(kind, name, e))?;

        log::debug!(
            "Resolved {} '{}' -> {} ({})",
            kind,
            name,
            resolved.id,
            resolved.outcome
        );
        self.emit_resolution_event(&resolved);

        Ok(resolved)
    }

    pub async fn resolve_crew_member(&self, name: &str) -> AppResult<ResolvedReference> {
        self.resolve(ReferenceKind::CrewMember, name).await
    }

    pub async fn resolve_genre(&self, name: &str) -> AppResult<ResolvedReference> {
        self.resolve(ReferenceKind::Genre, name).await
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    async fn resolve_internal(&self, kind: ReferenceKind, name: &str) -> AppResult<ResolvedReference> {
        match kind {
            ReferenceKind::CrewMember => {
                let existing = self.crew_repo.list_by_name(name).await?;
                if let Some(member) = existing.into_iter().next() {
                    return Ok(ResolvedReference::reused(kind, name, member.id));
                }
                let created = self.crew_repo.create(name).await?;
                Ok(ResolvedReference::created(kind, name, created.id))
            }
            ReferenceKind::Genre => {
                let existing = self.genre_repo.list_by_name(name).await?;
                if let Some(genre) = existing.into_iter().next() {
                    return Ok(ResolvedReference::reused(kind, name, genre.id));
                }
                let created = self.genre_repo.create(name).await?;
                Ok(ResolvedReference::created(kind, name, created.id))
            }
        }
    }

    fn emit_resolution_event(&self, resolved: &ResolvedReference) {
        if !resolved.was_created() {
            self.event_bus.emit(ReferenceReused::new(
                resolved.kind,
                resolved.id.clone(),
                resolved.name.clone(),
            ));
            return;
        }

        match resolved.kind {
            ReferenceKind::CrewMember => self
                .event_bus
                .emit(CrewMemberCreated::new(resolved.id.clone(), resolved.name.clone())),
            ReferenceKind::Genre => self
                .event_bus
                .emit(GenreCreated::new(resolved.id.clone(), resolved.name.clone())),
        }
    }
}
