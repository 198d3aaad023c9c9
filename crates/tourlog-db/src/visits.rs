//! Visit repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use tourlog_core::{
    new_v7, CreateVisitRequest, Error, GeoPoint, Result, UpdateVisitRequest, Visit,
    VisitRepository, VisitStatus,
};

/// PostgreSQL implementation of VisitRepository.
pub struct PgVisitRepository {
    pool: Pool<Postgres>,
}

impl PgVisitRepository {
    /// Create a new PgVisitRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

pub(crate) fn visit_from_row(row: &PgRow) -> Result<Visit> {
    let status: String = row.get("status");
    let status = status.parse::<VisitStatus>().map_err(Error::Internal)?;

    let latitude: Option<f64> = row.get("latitude");
    let longitude: Option<f64> = row.get("longitude");
    let coordinates = match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Some(GeoPoint {
            latitude,
            longitude,
        }),
        _ => None,
    };

    Ok(Visit {
        id: row.get("id"),
        owner: row.get("owner_handle"),
        name: row.get("name"),
        visit_date: row.get("visit_date"),
        location: row.get("location"),
        coordinates,
        status,
        created_at_utc: row.get("created_at_utc"),
        updated_at_utc: row.get("updated_at_utc"),
    })
}

const VISIT_COLUMNS: &str =
    "id, owner_handle, name, visit_date, location, latitude, longitude, status, \
     created_at_utc, updated_at_utc";

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn insert(&self, owner: &str, req: CreateVisitRequest) -> Result<Visit> {
        if req.name.trim().is_empty() {
            return Err(Error::InvalidInput("Visit name cannot be empty".to_string()));
        }

        let id = new_v7();
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO visit (id, owner_handle, name, visit_date, location, latitude, longitude, status, created_at_utc, updated_at_utc)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)",
        )
        .bind(id)
        .bind(owner)
        .bind(&req.name)
        .bind(req.visit_date)
        .bind(&req.location)
        .bind(req.coordinates.map(|c| c.latitude))
        .bind(req.coordinates.map(|c| c.longitude))
        .bind(VisitStatus::Draft.to_string())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        self.fetch(id).await
    }

    async fn fetch(&self, id: Uuid) -> Result<Visit> {
        let row = sqlx::query(&format!("SELECT {} FROM visit WHERE id = $1", VISIT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?
            .ok_or(Error::VisitNotFound(id))?;

        visit_from_row(&row)
    }

    async fn list_for_owner(&self, owner: &str) -> Result<Vec<Visit>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM visit WHERE owner_handle = $1 ORDER BY created_at_utc DESC, id DESC",
            VISIT_COLUMNS
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        rows.iter().map(visit_from_row).collect()
    }

    async fn update(&self, id: Uuid, req: UpdateVisitRequest) -> Result<Visit> {
        let current = self.fetch(id).await?;

        let name = req.name.unwrap_or(current.name);
        if name.trim().is_empty() {
            return Err(Error::InvalidInput("Visit name cannot be empty".to_string()));
        }
        let visit_date = req.visit_date.unwrap_or(current.visit_date);
        let location = req.location.unwrap_or(current.location);
        let coordinates = req.coordinates.unwrap_or(current.coordinates);
        let status = req.status.unwrap_or(current.status);

        sqlx::query(
            "UPDATE visit
             SET name = $2, visit_date = $3, location = $4, latitude = $5, longitude = $6,
                 status = $7, updated_at_utc = $8
             WHERE id = $1",
        )
        .bind(id)
        .bind(&name)
        .bind(visit_date)
        .bind(&location)
        .bind(coordinates.map(|c| c.latitude))
        .bind(coordinates.map(|c| c.longitude))
        .bind(status.to_string())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        self.fetch(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        // Notes, photos, and reports go with the visit via FK cascade.
        let result = sqlx::query("DELETE FROM visit WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::VisitNotFound(id));
        }
        Ok(())
    }
}
