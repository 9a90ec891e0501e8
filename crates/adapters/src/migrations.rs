/// Schema batches applied in order on every startup. Statements must
/// stay idempotent.
pub const MIGRATIONS: &[&str] = &["CREATE TABLE IF NOT EXISTS slots (
        slot_key TEXT PRIMARY KEY,
        record_json TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );"];
