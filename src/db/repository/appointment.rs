use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::repository::{find_or_create_doctor, find_or_create_patient, find_or_create_symptom};
use crate::db::DatabaseError;
use crate::models::{AppointmentRecord, NewAppointment, NewPatient};

/// Four-table join producing the flattened appointment representation.
/// Shared with the report queries, which append their own ORDER BY.
pub(crate) const JOINED_SELECT: &str = "SELECT appointments.id, patients.first_name, patients.last_name,
     patients.gender, patients.age, patients.birth,
     doctors.name, appointments.month, symptoms.name
     FROM appointments
     JOIN patients ON appointments.patient_id = patients.id
     JOIN doctors ON appointments.doctor_id = doctors.id
     JOIN symptoms ON appointments.symptom_id = symptoms.id";

pub(crate) fn record_from_row(row: &Row<'_>) -> rusqlite::Result<AppointmentRecord> {
    Ok(AppointmentRecord {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        gender: row.get(3)?,
        age: row.get(4)?,
        birth: row.get(5)?,
        doctor: row.get(6)?,
        month: row.get(7)?,
        symptom: row.get(8)?,
    })
}

/// Book an appointment, resolving the doctor, symptom, and patient by
/// natural key first (creating whichever are absent). All four writes
/// happen in one transaction, so a failure midway leaves no partial
/// state. Returns the joined representation of the new row.
pub fn insert_appointment(
    conn: &mut Connection,
    new: &NewAppointment,
) -> Result<AppointmentRecord, DatabaseError> {
    let tx = conn.transaction()?;

    let doctor = find_or_create_doctor(&tx, &new.doctor)?;
    let symptom = find_or_create_symptom(&tx, &new.symptom)?;
    let patient = find_or_create_patient(
        &tx,
        &NewPatient {
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            gender: new.gender.clone(),
            age: new.age,
            birth: new.birth.clone(),
        },
    )?;

    tx.execute(
        "INSERT INTO appointments (patient_id, doctor_id, symptom_id, month)
         VALUES (?1, ?2, ?3, ?4)",
        params![patient.id, doctor.id, symptom.id, new.month],
    )?;
    let id = tx.last_insert_rowid();

    let record = get_appointment_by_id(&tx, id)?.ok_or_else(|| {
        DatabaseError::ConstraintViolation(format!("appointment {id} missing after insert"))
    })?;

    tx.commit()?;
    Ok(record)
}

pub fn get_appointment_by_id(
    conn: &Connection,
    id: i64,
) -> Result<Option<AppointmentRecord>, DatabaseError> {
    let sql = format!("{JOINED_SELECT} WHERE appointments.id = ?1");
    let record = conn
        .query_row(&sql, params![id], record_from_row)
        .optional()?;
    Ok(record)
}

pub fn get_all_appointments(conn: &Connection) -> Result<Vec<AppointmentRecord>, DatabaseError> {
    let mut stmt = conn.prepare(JOINED_SELECT)?;

    let rows = stmt.query_map([], record_from_row)?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

/// Delete the appointment with the given id. Appointments are the leaf
/// entity, so nothing cascades; a missing id is a no-op.
pub fn delete_appointment(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM appointments WHERE id = ?1", params![id])?;
    Ok(())
}
