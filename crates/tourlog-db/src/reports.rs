//! Report repository implementation.
//!
//! Reports are append-only snapshots: generating again inserts a new row,
//! and the UI surfaces the most recent one via `latest_for_visit`.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use tourlog_core::{new_v7, Error, Report, ReportRepository, Result};

/// PostgreSQL implementation of ReportRepository.
pub struct PgReportRepository {
    pool: Pool<Postgres>,
}

impl PgReportRepository {
    /// Create a new PgReportRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn report_from_row(row: &PgRow) -> Report {
    Report {
        id: row.get("id"),
        visit_id: row.get("visit_id"),
        content: row.get("content"),
        created_at_utc: row.get("created_at_utc"),
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn insert(&self, visit_id: Uuid, content: &str) -> Result<Report> {
        let id = new_v7();
        let row = sqlx::query(
            "INSERT INTO report (id, visit_id, content, created_at_utc)
             VALUES ($1, $2, $3, $4)
             RETURNING id, visit_id, content, created_at_utc",
        )
        .bind(id)
        .bind(visit_id)
        .bind(content)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(report_from_row(&row))
    }

    async fn fetch(&self, id: Uuid) -> Result<Report> {
        let row = sqlx::query(
            "SELECT id, visit_id, content, created_at_utc FROM report WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?
        .ok_or(Error::ReportNotFound(id))?;

        Ok(report_from_row(&row))
    }

    async fn list_for_visit(&self, visit_id: Uuid) -> Result<Vec<Report>> {
        let rows = sqlx::query(
            "SELECT id, visit_id, content, created_at_utc
             FROM report WHERE visit_id = $1
             ORDER BY created_at_utc DESC, id DESC",
        )
        .bind(visit_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.iter().map(report_from_row).collect())
    }

    async fn latest_for_visit(&self, visit_id: Uuid) -> Result<Option<Report>> {
        let row = sqlx::query(
            "SELECT id, visit_id, content, created_at_utc
             FROM report WHERE visit_id = $1
             ORDER BY created_at_utc DESC, id DESC
             LIMIT 1",
        )
        .bind(visit_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(row.as_ref().map(report_from_row))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM report WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::ReportNotFound(id));
        }
        Ok(())
    }
}
