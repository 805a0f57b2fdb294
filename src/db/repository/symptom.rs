use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::Symptom;

/// Insert a symptom unless one with the same name exists, then return the
/// stored row either way.
pub fn find_or_create_symptom(conn: &Connection, name: &str) -> Result<Symptom, DatabaseError> {
    conn.execute("INSERT OR IGNORE INTO symptoms (name) VALUES (?1)", params![name])?;
    get_symptom_by_name(conn, name)?.ok_or_else(|| {
        DatabaseError::ConstraintViolation(format!("symptom {name:?} missing after upsert"))
    })
}

pub fn get_symptom_by_id(conn: &Connection, id: i64) -> Result<Option<Symptom>, DatabaseError> {
    let symptom = conn
        .query_row(
            "SELECT id, name FROM symptoms WHERE id = ?1",
            params![id],
            |row| {
                Ok(Symptom {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(symptom)
}

pub fn get_symptom_by_name(conn: &Connection, name: &str) -> Result<Option<Symptom>, DatabaseError> {
    let symptom = conn
        .query_row(
            "SELECT id, name FROM symptoms WHERE name = ?1",
            params![name],
            |row| {
                Ok(Symptom {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(symptom)
}

pub fn get_all_symptoms(conn: &Connection) -> Result<Vec<Symptom>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, name FROM symptoms")?;

    let rows = stmt.query_map([], |row| {
        Ok(Symptom {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

/// Delete the symptom with the given id; the cascade removes its
/// appointments. A missing id is a no-op.
pub fn delete_symptom(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM symptoms WHERE id = ?1", params![id])?;
    Ok(())
}
