//! UUID v7 identifiers for all tourlog entities.
//!
//! UUIDv7 embeds a millisecond-precision Unix timestamp in the first 48
//! bits, so freshly inserted rows sort by id in creation order and
//! newest-first listings stay cheap.

use uuid::Uuid;

/// Generate a new UUIDv7 identifier.
#[inline]
pub fn new_v7() -> Uuid {
    Uuid::now_v7()
}
