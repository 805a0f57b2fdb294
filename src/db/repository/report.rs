//! Grouped appointment reads backing the report views.
//!
//! Both queries order by the group key first, so groups come out in
//! lexicographic key order and members in patient-first-name order.
//! Accumulation keeps each group's first-encounter position, which
//! under the ORDER BY equals its alphabetical position.

use rusqlite::Connection;

use crate::db::repository::appointment::{record_from_row, JOINED_SELECT};
use crate::db::DatabaseError;
use crate::models::AppointmentRecord;

/// All appointments grouped by doctor name.
pub fn appointments_by_doctor(
    conn: &Connection,
) -> Result<Vec<(String, Vec<AppointmentRecord>)>, DatabaseError> {
    let sql = format!("{JOINED_SELECT} ORDER BY doctors.name, patients.first_name");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], record_from_row)?;

    let mut groups: Vec<(String, Vec<AppointmentRecord>)> = Vec::new();
    for row in rows {
        let record = row?;
        match groups.last_mut() {
            Some((key, members)) if *key == record.doctor => members.push(record),
            _ => groups.push((record.doctor.clone(), vec![record])),
        }
    }
    Ok(groups)
}

/// All appointments grouped by scheduled month.
pub fn appointments_by_month(
    conn: &Connection,
) -> Result<Vec<(String, Vec<AppointmentRecord>)>, DatabaseError> {
    let sql = format!("{JOINED_SELECT} ORDER BY appointments.month, patients.first_name");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], record_from_row)?;

    let mut groups: Vec<(String, Vec<AppointmentRecord>)> = Vec::new();
    for row in rows {
        let record = row?;
        match groups.last_mut() {
            Some((key, members)) if *key == record.month => members.push(record),
            _ => groups.push((record.month.clone(), vec![record])),
        }
    }
    Ok(groups)
}
