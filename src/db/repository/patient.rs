use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::DatabaseError;
use crate::models::{NewPatient, Patient};

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        gender: row.get(3)?,
        age: row.get(4)?,
        birth: row.get(5)?,
    })
}

/// Insert a patient unless one with the same (first, last) name pair
/// exists, then return the stored row either way. An existing patient's
/// gender/age/birth are left untouched.
pub fn find_or_create_patient(
    conn: &Connection,
    patient: &NewPatient,
) -> Result<Patient, DatabaseError> {
    conn.execute(
        "INSERT OR IGNORE INTO patients (first_name, last_name, gender, age, birth)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            patient.first_name,
            patient.last_name,
            patient.gender,
            patient.age,
            patient.birth,
        ],
    )?;
    get_patient_by_name(conn, &patient.first_name, &patient.last_name)?.ok_or_else(|| {
        DatabaseError::ConstraintViolation(format!(
            "patient {:?} {:?} missing after upsert",
            patient.first_name, patient.last_name
        ))
    })
}

pub fn get_patient_by_id(conn: &Connection, id: i64) -> Result<Option<Patient>, DatabaseError> {
    let patient = conn
        .query_row(
            "SELECT id, first_name, last_name, gender, age, birth
             FROM patients WHERE id = ?1",
            params![id],
            patient_from_row,
        )
        .optional()?;
    Ok(patient)
}

pub fn get_patient_by_name(
    conn: &Connection,
    first_name: &str,
    last_name: &str,
) -> Result<Option<Patient>, DatabaseError> {
    let patient = conn
        .query_row(
            "SELECT id, first_name, last_name, gender, age, birth
             FROM patients WHERE first_name = ?1 AND last_name = ?2",
            params![first_name, last_name],
            patient_from_row,
        )
        .optional()?;
    Ok(patient)
}

pub fn get_all_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, gender, age, birth FROM patients",
    )?;

    let rows = stmt.query_map([], patient_from_row)?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

/// Delete the patient with the given id; the cascade removes their
/// appointments. A missing id is a no-op.
pub fn delete_patient(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM patients WHERE id = ?1", params![id])?;
    Ok(())
}
