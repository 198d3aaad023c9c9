//! Structured logging field name constants for tourlog.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized names across every
//! subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events, operation completions |
//! | DEBUG | Decision points, intermediate values |
//! | TRACE | Per-item iteration, high-volume data |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "db", "report", "storage"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "pool", "compose", "photo_store"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "insert", "list_for_visit", "generate"
pub const OPERATION: &str = "op";

/// Opaque handle of the acting user.
pub const USER: &str = "user";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Visit UUID being operated on.
pub const VISIT_ID: &str = "visit_id";

/// Note UUID being operated on.
pub const NOTE_ID: &str = "note_id";

/// Photo UUID being operated on.
pub const PHOTO_ID: &str = "photo_id";

/// Report UUID being operated on.
pub const REPORT_ID: &str = "report_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of rows returned by a listing.
pub const RESULT_COUNT: &str = "result_count";

/// Number of notes feeding a composition.
pub const NOTE_COUNT: &str = "note_count";

/// Number of photos feeding a composition.
pub const PHOTO_COUNT: &str = "photo_count";

/// Byte length of a composed document.
pub const DOCUMENT_LEN: &str = "document_len";

// ─── Database fields ───────────────────────────────────────────────────────

/// Number of active connections in the pool.
pub const POOL_SIZE: &str = "pool_size";

/// Number of idle connections in the pool.
pub const POOL_IDLE: &str = "pool_idle";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
