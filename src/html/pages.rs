//! HTML rendering — self-contained pages (no template engine).
//!
//! Pages are assembled with `format!` from raw-string fragments and a
//! shared shell. Every interpolated value goes through `escape_html`.

use crate::models::{AppointmentRecord, Doctor, Patient, Symptom};

/// Notice shown on the add-appointment page after a submission.
pub struct AddNotice {
    pub success: bool,
    pub message: &'static str,
}

/// Escape a value for interpolation into HTML text or attributes.
pub(crate) fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - Wardbook</title>
<style>
body{{margin:0;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#fafaf9;color:#1c1917;padding:24px}}
nav{{margin-bottom:24px}}
nav a{{margin-right:12px;color:#0d9488;text-decoration:none;font-weight:600}}
h1{{font-size:1.5rem}}
h2{{font-size:1.1rem;margin:24px 0 8px}}
table{{border-collapse:collapse;background:#fff;box-shadow:0 1px 4px rgba(0,0,0,.08)}}
th,td{{padding:8px 12px;border:1px solid #e7e5e4;text-align:left;font-size:.9rem}}
th{{background:#f5f5f4}}
form{{max-width:360px}}
label{{display:block;margin:12px 0 4px;font-size:.9rem;font-weight:600}}
input{{width:100%;padding:8px;border:1px solid #d6d3d1;border-radius:6px;box-sizing:border-box}}
button{{margin-top:16px;padding:10px 20px;border:none;border-radius:6px;background:#0d9488;color:#fff;font-weight:600;cursor:pointer}}
.notice-ok{{color:#15803d;font-weight:600}}
.notice-err{{color:#b91c1c;font-weight:600}}
.empty{{color:#78716c}}
</style>
</head>
<body>
<nav>
  <a href="/">Home</a>
  <a href="/apps">Appointments</a>
  <a href="/doctors">Doctors</a>
  <a href="/patients">Patients</a>
  <a href="/symptoms">Symptoms</a>
  <a href="/by-doctor">By doctor</a>
  <a href="/by-month">By month</a>
  <a href="/add">Add appointment</a>
</nav>
{body}
</body>
</html>"##
    )
}

pub fn render_main_page() -> String {
    page_shell(
        "Home",
        "<h1>Wardbook</h1>\n<p>A small hospital appointment record keeper. \
         Browse the records through the links above, or book a new \
         appointment.</p>",
    )
}

fn appointment_table(records: &[AppointmentRecord]) -> String {
    if records.is_empty() {
        return r#"<p class="empty">No appointments recorded.</p>"#.to_string();
    }

    let mut rows = String::new();
    for r in records {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            r.id,
            escape_html(&r.first_name),
            escape_html(&r.last_name),
            escape_html(&r.gender),
            r.age,
            escape_html(&r.birth),
            escape_html(&r.doctor),
            escape_html(&r.month),
            escape_html(&r.symptom),
        ));
    }

    format!(
        "<table>\n<tr><th>Id</th><th>First name</th><th>Last name</th><th>Gender</th>\
         <th>Age</th><th>Birth</th><th>Doctor</th><th>Month</th><th>Symptom</th></tr>\n\
         {rows}</table>"
    )
}

pub fn render_appointments_page(records: &[AppointmentRecord]) -> String {
    let body = format!("<h1>Appointments</h1>\n{}", appointment_table(records));
    page_shell("Appointments", &body)
}

pub fn render_doctors_page(doctors: &[Doctor]) -> String {
    let mut rows = String::new();
    for d in doctors {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            d.id,
            escape_html(&d.name)
        ));
    }
    let table = if doctors.is_empty() {
        r#"<p class="empty">No doctors recorded.</p>"#.to_string()
    } else {
        format!("<table>\n<tr><th>Id</th><th>Name</th></tr>\n{rows}</table>")
    };
    page_shell("Doctors", &format!("<h1>Doctors</h1>\n{table}"))
}

pub fn render_symptoms_page(symptoms: &[Symptom]) -> String {
    let mut rows = String::new();
    for s in symptoms {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            s.id,
            escape_html(&s.name)
        ));
    }
    let table = if symptoms.is_empty() {
        r#"<p class="empty">No symptoms recorded.</p>"#.to_string()
    } else {
        format!("<table>\n<tr><th>Id</th><th>Name</th></tr>\n{rows}</table>")
    };
    page_shell("Symptoms", &format!("<h1>Symptoms</h1>\n{table}"))
}

pub fn render_patients_page(patients: &[Patient]) -> String {
    let mut rows = String::new();
    for p in patients {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            p.id,
            escape_html(&p.first_name),
            escape_html(&p.last_name),
            escape_html(&p.gender),
            p.age,
            escape_html(&p.birth),
        ));
    }
    let table = if patients.is_empty() {
        r#"<p class="empty">No patients recorded.</p>"#.to_string()
    } else {
        format!(
            "<table>\n<tr><th>Id</th><th>First name</th><th>Last name</th>\
             <th>Gender</th><th>Age</th><th>Birth</th></tr>\n{rows}</table>"
        )
    };
    page_shell("Patients", &format!("<h1>Patients</h1>\n{table}"))
}

fn grouped_page(title: &str, groups: &[(String, Vec<AppointmentRecord>)]) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape_html(title));
    if groups.is_empty() {
        body.push_str(r#"<p class="empty">No appointments recorded.</p>"#);
    }
    for (key, members) in groups {
        body.push_str(&format!(
            "<h2>{}</h2>\n{}\n",
            escape_html(key),
            appointment_table(members)
        ));
    }
    page_shell(title, &body)
}

pub fn render_by_doctor_page(groups: &[(String, Vec<AppointmentRecord>)]) -> String {
    grouped_page("Appointments by doctor", groups)
}

pub fn render_by_month_page(groups: &[(String, Vec<AppointmentRecord>)]) -> String {
    grouped_page("Appointments by month", groups)
}

pub fn render_add_page(notice: Option<&AddNotice>) -> String {
    let notice_html = match notice {
        Some(AddNotice { success: true, message }) => {
            format!(r#"<p class="notice-ok">{}</p>"#, escape_html(message))
        }
        Some(AddNotice { success: false, message }) => {
            format!(r#"<p class="notice-err">{}</p>"#, escape_html(message))
        }
        None => String::new(),
    };

    let body = format!(
        r#"<h1>Add an appointment</h1>
{notice_html}
<form method="post" action="/add">
  <label for="first_name">First name</label>
  <input id="first_name" name="first_name">
  <label for="last_name">Last name</label>
  <input id="last_name" name="last_name">
  <label for="gender">Gender</label>
  <input id="gender" name="gender">
  <label for="age">Age</label>
  <input id="age" name="age">
  <label for="birth">Birth date</label>
  <input id="birth" name="birth">
  <label for="doctor">Doctor</label>
  <input id="doctor" name="doctor">
  <label for="month">Month</label>
  <input id="month" name="month">
  <label for="symptom">Symptom</label>
  <input id="symptom" name="symptom">
  <button type="submit">Book appointment</button>
</form>"#
    );
    page_shell("Add appointment", &body)
}
