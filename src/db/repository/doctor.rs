use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::Doctor;

/// Insert a doctor unless one with the same name exists, then return the
/// stored row either way. Duplicate names are never an error.
pub fn find_or_create_doctor(conn: &Connection, name: &str) -> Result<Doctor, DatabaseError> {
    conn.execute("INSERT OR IGNORE INTO doctors (name) VALUES (?1)", params![name])?;
    get_doctor_by_name(conn, name)?.ok_or_else(|| {
        DatabaseError::ConstraintViolation(format!("doctor {name:?} missing after upsert"))
    })
}

pub fn get_doctor_by_id(conn: &Connection, id: i64) -> Result<Option<Doctor>, DatabaseError> {
    let doctor = conn
        .query_row(
            "SELECT id, name FROM doctors WHERE id = ?1",
            params![id],
            |row| {
                Ok(Doctor {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(doctor)
}

pub fn get_doctor_by_name(conn: &Connection, name: &str) -> Result<Option<Doctor>, DatabaseError> {
    let doctor = conn
        .query_row(
            "SELECT id, name FROM doctors WHERE name = ?1",
            params![name],
            |row| {
                Ok(Doctor {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(doctor)
}

pub fn get_all_doctors(conn: &Connection) -> Result<Vec<Doctor>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, name FROM doctors")?;

    let rows = stmt.query_map([], |row| {
        Ok(Doctor {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

/// Delete the doctor with the given id. Appointments referencing it are
/// removed by the schema's cascade; a missing id is a no-op.
pub fn delete_doctor(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM doctors WHERE id = ?1", params![id])?;
    Ok(())
}
