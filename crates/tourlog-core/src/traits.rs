//! Core traits for tourlog abstractions.
//!
//! These traits define the record-store and identity collaborator surfaces
//! that concrete implementations must satisfy, enabling pluggable backends
//! and testability. All child-entity listings return rows newest first; the
//! report composer relies on that ordering and never re-sorts.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// VISIT REPOSITORY
// =============================================================================

/// Repository for visit CRUD operations.
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Insert a new visit owned by the given user.
    async fn insert(&self, owner: &str, req: CreateVisitRequest) -> Result<Visit>;

    /// Fetch a visit by ID.
    async fn fetch(&self, id: Uuid) -> Result<Visit>;

    /// List all visits for an owner, newest first.
    async fn list_for_owner(&self, owner: &str) -> Result<Vec<Visit>>;

    /// Update visit fields in place.
    async fn update(&self, id: Uuid, req: UpdateVisitRequest) -> Result<Visit>;

    /// Delete a visit and everything attached to it.
    async fn delete(&self, id: Uuid) -> Result<()>;
}

// =============================================================================
// NOTE REPOSITORY
// =============================================================================

/// Repository for note CRUD operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note.
    async fn insert(&self, req: CreateNoteRequest) -> Result<Note>;

    /// Fetch a note by ID.
    async fn fetch(&self, id: Uuid) -> Result<Note>;

    /// List all notes for a visit, newest first.
    async fn list_for_visit(&self, visit_id: Uuid) -> Result<Vec<Note>>;

    /// Edit a note in place, bumping its updated timestamp.
    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<Note>;

    /// Delete a note.
    async fn delete(&self, id: Uuid) -> Result<()>;
}

// =============================================================================
// PHOTO REPOSITORY
// =============================================================================

/// Repository for photo records.
///
/// Photos have no update operation: once created they are immutable except
/// by deletion.
#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Insert a new photo record.
    async fn insert(&self, req: CreatePhotoRequest) -> Result<Photo>;

    /// Fetch a photo by ID.
    async fn fetch(&self, id: Uuid) -> Result<Photo>;

    /// List all photos for a visit, newest first.
    async fn list_for_visit(&self, visit_id: Uuid) -> Result<Vec<Photo>>;

    /// Delete a photo record.
    async fn delete(&self, id: Uuid) -> Result<()>;
}

// =============================================================================
// REPORT REPOSITORY
// =============================================================================

/// Repository for generated report snapshots.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Persist a freshly composed report for a visit.
    async fn insert(&self, visit_id: Uuid, content: &str) -> Result<Report>;

    /// Fetch a report by ID.
    async fn fetch(&self, id: Uuid) -> Result<Report>;

    /// List all reports for a visit, newest first.
    async fn list_for_visit(&self, visit_id: Uuid) -> Result<Vec<Report>>;

    /// Fetch the most recently generated report for a visit, if any.
    async fn latest_for_visit(&self, visit_id: Uuid) -> Result<Option<Report>>;

    /// Delete a report.
    async fn delete(&self, id: Uuid) -> Result<()>;
}

// =============================================================================
// IDENTITY
// =============================================================================

/// Provider of the current user's opaque handle.
///
/// Authentication itself is outside this system; implementations only
/// surface whatever handle the surrounding deployment established.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Handle of the user on whose behalf operations run.
    async fn current_user(&self) -> Result<String>;
}

/// Identity provider with a fixed handle.
///
/// Used by tests and single-user deployments.
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    handle: String,
}

impl StaticIdentity {
    /// Create a provider that always returns `handle`.
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn current_user(&self) -> Result<String> {
        Ok(self.handle.clone())
    }
}
