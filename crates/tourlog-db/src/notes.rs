//! Note repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use tourlog_core::{
    new_v7, CreateNoteRequest, Error, Note, NoteRepository, Result, UpdateNoteRequest,
};

/// PostgreSQL implementation of NoteRepository.
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn note_from_row(row: &PgRow) -> Note {
    Note {
        id: row.get("id"),
        visit_id: row.get("visit_id"),
        category: row.get("category"),
        content: row.get("content"),
        created_at_utc: row.get("created_at_utc"),
        updated_at_utc: row.get("updated_at_utc"),
    }
}

fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(Error::InvalidInput("Note content cannot be empty".to_string()));
    }
    Ok(())
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn insert(&self, req: CreateNoteRequest) -> Result<Note> {
        validate_content(&req.content)?;

        let id = new_v7();
        let now = Utc::now();
        let row = sqlx::query(
            "INSERT INTO note (id, visit_id, category, content, created_at_utc, updated_at_utc)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING id, visit_id, category, content, created_at_utc, updated_at_utc",
        )
        .bind(id)
        .bind(req.visit_id)
        .bind(req.category.tag())
        .bind(&req.content)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(note_from_row(&row))
    }

    async fn fetch(&self, id: Uuid) -> Result<Note> {
        let row = sqlx::query(
            "SELECT id, visit_id, category, content, created_at_utc, updated_at_utc
             FROM note WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?
        .ok_or(Error::NoteNotFound(id))?;

        Ok(note_from_row(&row))
    }

    async fn list_for_visit(&self, visit_id: Uuid) -> Result<Vec<Note>> {
        let rows = sqlx::query(
            "SELECT id, visit_id, category, content, created_at_utc, updated_at_utc
             FROM note WHERE visit_id = $1
             ORDER BY created_at_utc DESC, id DESC",
        )
        .bind(visit_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<Note> {
        let current = self.fetch(id).await?;

        let category = req
            .category
            .map(|c| c.tag().to_string())
            .unwrap_or(current.category);
        let content = req.content.unwrap_or(current.content);
        validate_content(&content)?;

        let row = sqlx::query(
            "UPDATE note SET category = $2, content = $3, updated_at_utc = $4
             WHERE id = $1
             RETURNING id, visit_id, category, content, created_at_utc, updated_at_utc",
        )
        .bind(id)
        .bind(&category)
        .bind(&content)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(note_from_row(&row))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM note WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }
        Ok(())
    }
}
