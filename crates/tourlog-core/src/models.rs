//! Core data models for tourlog.
//!
//! These types are shared across all tourlog crates and represent the four
//! persisted entity kinds: visits, notes, photos, and reports.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::NoteCategory;

// =============================================================================
// VISIT TYPES
// =============================================================================

/// Lifecycle status of a visit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitStatus {
    /// Still being planned or documented.
    #[default]
    Draft,
    /// Visit happened and documentation is finished.
    Completed,
}

impl std::fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for VisitStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("Invalid visit status: {}", s)),
        }
    }
}

/// Geographic coordinate pair attached to a visit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A documented site visit (one college tour).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visit {
    pub id: Uuid,
    /// Opaque handle of the user who owns this visit.
    pub owner: String,
    /// Display name, e.g. the school being toured.
    pub name: String,
    pub visit_date: NaiveDate,
    /// Free-text location; empty string when the user left it blank.
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoPoint>,
    pub status: VisitStatus,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

/// Request for creating a new visit.
#[derive(Debug, Clone)]
pub struct CreateVisitRequest {
    pub name: String,
    pub visit_date: NaiveDate,
    pub location: String,
    pub coordinates: Option<GeoPoint>,
}

/// Request for updating a visit. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateVisitRequest {
    pub name: Option<String>,
    pub visit_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub coordinates: Option<Option<GeoPoint>>,
    pub status: Option<VisitStatus>,
}

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A categorized free-text observation attached to a visit.
///
/// `category` carries the tag string exactly as stored. Rows written through
/// the editing path always hold a tag from [`NoteCategory`]; older rows may
/// carry tags outside the closed set and are handled by the raw-tag fallback
/// at composition time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub visit_id: Uuid,
    pub category: String,
    pub content: String,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

/// Request for creating a new note.
#[derive(Debug, Clone)]
pub struct CreateNoteRequest {
    pub visit_id: Uuid,
    pub category: NoteCategory,
    pub content: String,
}

/// Request for editing a note in place. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateNoteRequest {
    pub category: Option<NoteCategory>,
    pub content: Option<String>,
}

// =============================================================================
// PHOTO TYPES
// =============================================================================

/// An uploaded image reference attached to a visit.
///
/// Immutable once created except by deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: Uuid,
    pub visit_id: Uuid,
    /// Retrievable URL issued by the object store.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub created_at_utc: DateTime<Utc>,
}

/// Request for creating a new photo record.
#[derive(Debug, Clone)]
pub struct CreatePhotoRequest {
    pub visit_id: Uuid,
    pub url: String,
    pub caption: Option<String>,
}

// =============================================================================
// REPORT TYPES
// =============================================================================

/// A generated report snapshot for a visit.
///
/// Immutable; generating again inserts a new row rather than mutating an
/// existing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub visit_id: Uuid,
    /// Full markup text, persisted verbatim as composed.
    pub content: String,
    pub created_at_utc: DateTime<Utc>,
}
