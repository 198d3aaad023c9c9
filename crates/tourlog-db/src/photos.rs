//! Photo repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use tourlog_core::{new_v7, CreatePhotoRequest, Error, Photo, PhotoRepository, Result};

/// PostgreSQL implementation of PhotoRepository.
pub struct PgPhotoRepository {
    pool: Pool<Postgres>,
}

impl PgPhotoRepository {
    /// Create a new PgPhotoRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn photo_from_row(row: &PgRow) -> Photo {
    Photo {
        id: row.get("id"),
        visit_id: row.get("visit_id"),
        url: row.get("url"),
        caption: row.get("caption"),
        created_at_utc: row.get("created_at_utc"),
    }
}

#[async_trait]
impl PhotoRepository for PgPhotoRepository {
    async fn insert(&self, req: CreatePhotoRequest) -> Result<Photo> {
        if req.url.trim().is_empty() {
            return Err(Error::InvalidInput("Photo URL cannot be empty".to_string()));
        }

        let id = new_v7();
        let row = sqlx::query(
            "INSERT INTO photo (id, visit_id, url, caption, created_at_utc)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, visit_id, url, caption, created_at_utc",
        )
        .bind(id)
        .bind(req.visit_id)
        .bind(&req.url)
        .bind(&req.caption)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(photo_from_row(&row))
    }

    async fn fetch(&self, id: Uuid) -> Result<Photo> {
        let row = sqlx::query(
            "SELECT id, visit_id, url, caption, created_at_utc FROM photo WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?
        .ok_or(Error::PhotoNotFound(id))?;

        Ok(photo_from_row(&row))
    }

    async fn list_for_visit(&self, visit_id: Uuid) -> Result<Vec<Photo>> {
        let rows = sqlx::query(
            "SELECT id, visit_id, url, caption, created_at_utc
             FROM photo WHERE visit_id = $1
             ORDER BY created_at_utc DESC, id DESC",
        )
        .bind(visit_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.iter().map(photo_from_row).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM photo WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::PhotoNotFound(id));
        }
        Ok(())
    }
}
