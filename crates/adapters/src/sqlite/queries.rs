use rusqlite::{params, Connection, Result};

pub fn upsert_slot(
    conn: &Connection,
    slot_key: &str,
    record_json: &str,
    updated_at: &str,
) -> Result<()> {
    conn.execute(
        "INSERT INTO slots (slot_key, record_json, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(slot_key) DO UPDATE SET
            record_json = excluded.record_json,
            updated_at = excluded.updated_at",
        params![slot_key, record_json, updated_at],
    )?;
    Ok(())
}

pub fn find_slot(conn: &Connection, slot_key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT record_json FROM slots WHERE slot_key = ?1")?;
    let mut rows = stmt.query(params![slot_key])?;
    if let Some(row) = rows.next()? {
        let record_json: String = row.get(0)?;
        return Ok(Some(record_json));
    }
    Ok(None)
}

pub fn delete_slot(conn: &Connection, slot_key: &str) -> Result<()> {
    conn.execute("DELETE FROM slots WHERE slot_key = ?1", params![slot_key])?;
    Ok(())
}
