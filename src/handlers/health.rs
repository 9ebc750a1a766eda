// src/handlers/health.rs

use crate::response::Envelope;

/// Liveness probe. Does not touch the database.
pub async fn health() -> Envelope {
    Envelope::ok_with_message("ok")
}
