//! # tourlog-db
//!
//! PostgreSQL record store for tourlog.
//!
//! This crate provides:
//! - Connection pool management
//! - Repository implementations for all four entity kinds
//! - Content-addressed object storage for photo uploads
//!
//! ## Example
//!
//! ```rust,ignore
//! use tourlog_core::{CreateVisitRequest, VisitRepository};
//! use tourlog_db::Database;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/tourlog").await?;
//!
//!     let visit = db.visits.insert("user-1", CreateVisitRequest {
//!         name: "Oberlin College".to_string(),
//!         visit_date: chrono::NaiveDate::from_ymd_opt(2026, 4, 12).unwrap(),
//!         location: "Oberlin, OH".to_string(),
//!         coordinates: None,
//!     }).await?;
//!
//!     println!("Created visit: {}", visit.id);
//!     Ok(())
//! }
//! ```

pub mod notes;
pub mod object_store;
pub mod photos;
pub mod pool;
pub mod reports;
pub mod visits;

// Test fixtures for integration tests
// Note: Always compiled so integration tests (in tests/) can use DEFAULT_TEST_DATABASE_URL
pub mod test_fixtures;

// Re-export core types
pub use tourlog_core::*;

// Re-export repository implementations
pub use notes::PgNoteRepository;
pub use object_store::{
    FilesystemBackend, ObjectStoreConfig, PhotoStore, StorageBackend, StoredObject,
};
pub use photos::PgPhotoRepository;
pub use pool::{create_pool, create_pool_with_config, log_pool_metrics, PoolConfig};
pub use reports::PgReportRepository;
pub use visits::PgVisitRepository;

/// Combined database context with all repositories.
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Visit repository for CRUD operations.
    pub visits: PgVisitRepository,
    /// Note repository for CRUD operations.
    pub notes: PgNoteRepository,
    /// Photo repository for photo records.
    pub photos: PgPhotoRepository,
    /// Report repository for generated snapshots.
    pub reports: PgReportRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            visits: PgVisitRepository::new(pool.clone()),
            notes: PgNoteRepository::new(pool.clone()),
            photos: PgPhotoRepository::new(pool.clone()),
            reports: PgReportRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}
