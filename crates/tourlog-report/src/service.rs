//! Report generation service.
//!
//! Ties the pure composer to the record store: fetch the visit and its
//! notes and photos (the store returns children newest first), compose the
//! document, persist it as a new report row. Debouncing repeated generate
//! actions is a caller concern; the service itself is stateless.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};
use uuid::Uuid;

use tourlog_core::{
    NoteRepository, PhotoRepository, Report, ReportRepository, Result, VisitRepository,
};

use crate::compose::compose;

/// Orchestrates the "generate report" action for a visit.
pub struct ReportService {
    visits: Arc<dyn VisitRepository>,
    notes: Arc<dyn NoteRepository>,
    photos: Arc<dyn PhotoRepository>,
    reports: Arc<dyn ReportRepository>,
}

impl ReportService {
    /// Create a new report service over the given repositories.
    pub fn new(
        visits: Arc<dyn VisitRepository>,
        notes: Arc<dyn NoteRepository>,
        photos: Arc<dyn PhotoRepository>,
        reports: Arc<dyn ReportRepository>,
    ) -> Self {
        Self {
            visits,
            notes,
            photos,
            reports,
        }
    }

    /// Generate and persist a new report for a visit.
    ///
    /// Composes from a point-in-time snapshot of the visit's notes and
    /// photos; the stored report is never re-derived afterwards.
    pub async fn generate(&self, visit_id: Uuid) -> Result<Report> {
        let start = Instant::now();

        let visit = self.visits.fetch(visit_id).await?;
        let notes = self.notes.list_for_visit(visit_id).await?;
        let photos = self.photos.list_for_visit(visit_id).await?;

        debug!(
            subsystem = "report",
            component = "service",
            op = "generate",
            visit_id = %visit_id,
            note_count = notes.len(),
            photo_count = photos.len(),
            "Composing report"
        );

        let document = compose(&visit, &notes, &photos);
        let report = self.reports.insert(visit_id, &document).await?;

        info!(
            subsystem = "report",
            component = "service",
            op = "generate",
            visit_id = %visit_id,
            report_id = %report.id,
            document_len = document.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Report generated"
        );
        Ok(report)
    }

    /// Fetch the report the UI surfaces for a visit: the most recent one.
    pub async fn latest(&self, visit_id: Uuid) -> Result<Option<Report>> {
        self.reports.latest_for_visit(visit_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use std::sync::Mutex;
    use tourlog_core::{
        new_v7, CreateNoteRequest, CreatePhotoRequest, CreateVisitRequest, Error, Note, Photo,
        UpdateNoteRequest, UpdateVisitRequest, Visit, VisitStatus,
    };

    struct FixtureStore {
        visit: Visit,
        notes: Vec<Note>,
        photos: Vec<Photo>,
        saved: Mutex<Vec<Report>>,
    }

    impl FixtureStore {
        fn new(notes: Vec<Note>, photos: Vec<Photo>) -> Arc<Self> {
            Arc::new(Self {
                visit: Visit {
                    id: new_v7(),
                    owner: "tester".to_string(),
                    name: "Carleton College".to_string(),
                    visit_date: NaiveDate::from_ymd_opt(2026, 5, 2).unwrap(),
                    location: "Northfield, MN".to_string(),
                    coordinates: None,
                    status: VisitStatus::Draft,
                    created_at_utc: Utc::now(),
                    updated_at_utc: Utc::now(),
                },
                notes,
                photos,
                saved: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl VisitRepository for FixtureStore {
        async fn insert(&self, _owner: &str, _req: CreateVisitRequest) -> Result<Visit> {
            unimplemented!()
        }
        async fn fetch(&self, id: Uuid) -> Result<Visit> {
            if id == self.visit.id {
                Ok(self.visit.clone())
            } else {
                Err(Error::VisitNotFound(id))
            }
        }
        async fn list_for_owner(&self, _owner: &str) -> Result<Vec<Visit>> {
            unimplemented!()
        }
        async fn update(&self, _id: Uuid, _req: UpdateVisitRequest) -> Result<Visit> {
            unimplemented!()
        }
        async fn delete(&self, _id: Uuid) -> Result<()> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl NoteRepository for FixtureStore {
        async fn insert(&self, _req: CreateNoteRequest) -> Result<Note> {
            unimplemented!()
        }
        async fn fetch(&self, id: Uuid) -> Result<Note> {
            Err(Error::NoteNotFound(id))
        }
        async fn list_for_visit(&self, _visit_id: Uuid) -> Result<Vec<Note>> {
            Ok(self.notes.clone())
        }
        async fn update(&self, _id: Uuid, _req: UpdateNoteRequest) -> Result<Note> {
            unimplemented!()
        }
        async fn delete(&self, _id: Uuid) -> Result<()> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl PhotoRepository for FixtureStore {
        async fn insert(&self, _req: CreatePhotoRequest) -> Result<Photo> {
            unimplemented!()
        }
        async fn fetch(&self, id: Uuid) -> Result<Photo> {
            Err(Error::PhotoNotFound(id))
        }
        async fn list_for_visit(&self, _visit_id: Uuid) -> Result<Vec<Photo>> {
            Ok(self.photos.clone())
        }
        async fn delete(&self, _id: Uuid) -> Result<()> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl ReportRepository for FixtureStore {
        async fn insert(&self, visit_id: Uuid, content: &str) -> Result<Report> {
            let report = Report {
                id: new_v7(),
                visit_id,
                content: content.to_string(),
                created_at_utc: Utc::now(),
            };
            self.saved.lock().unwrap().push(report.clone());
            Ok(report)
        }
        async fn fetch(&self, id: Uuid) -> Result<Report> {
            Err(Error::ReportNotFound(id))
        }
        async fn list_for_visit(&self, _visit_id: Uuid) -> Result<Vec<Report>> {
            Ok(self.saved.lock().unwrap().clone())
        }
        async fn latest_for_visit(&self, _visit_id: Uuid) -> Result<Option<Report>> {
            Ok(self.saved.lock().unwrap().last().cloned())
        }
        async fn delete(&self, _id: Uuid) -> Result<()> {
            unimplemented!()
        }
    }

    fn service(store: &Arc<FixtureStore>) -> ReportService {
        ReportService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        )
    }

    #[tokio::test]
    async fn test_generate_persists_composed_document() {
        let store = FixtureStore::new(
            vec![Note {
                id: new_v7(),
                visit_id: new_v7(),
                category: "campus".to_string(),
                content: "Prairie views from the chapel".to_string(),
                created_at_utc: Utc::now(),
                updated_at_utc: Utc::now(),
            }],
            vec![],
        );
        let report = service(&store).generate(store.visit.id).await.unwrap();

        assert_eq!(report.visit_id, store.visit.id);
        assert!(report.content.contains("# Carleton College Visit Report"));
        assert!(report.content.contains("Prairie views from the chapel"));
        assert_eq!(store.saved.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generate_twice_keeps_both_snapshots() {
        let store = FixtureStore::new(vec![], vec![]);
        let svc = service(&store);
        let first = svc.generate(store.visit.id).await.unwrap();
        let second = svc.generate(store.visit.id).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.saved.lock().unwrap().len(), 2);
        let latest = svc.latest(store.visit.id).await.unwrap().unwrap();
        assert_eq!(latest.id, second.id);
    }

    #[tokio::test]
    async fn test_generate_fails_for_unknown_visit() {
        let store = FixtureStore::new(vec![], vec![]);
        let missing = new_v7();
        let err = service(&store).generate(missing).await.unwrap_err();
        match err {
            Error::VisitNotFound(id) => assert_eq!(id, missing),
            other => panic!("expected VisitNotFound, got {}", other),
        }
    }
}
