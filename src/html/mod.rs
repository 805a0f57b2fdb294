//! HTML interface — the same read surface as the REST API, rendered as
//! server-side pages, plus the two grouped report views and the
//! add-appointment form.

pub mod pages;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::NewAppointment;
use pages::AddNotice;

/// Maximum length of any single form field.
const MAX_FIELD_LEN: usize = 20;

/// Build the HTML page router. Mounted at the server root.
pub fn pages_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/", get(main_page))
        .route("/apps", get(appointments_page))
        .route("/doctors", get(doctors_page))
        .route("/patients", get(patients_page))
        .route("/symptoms", get(symptoms_page))
        .route("/by-doctor", get(by_doctor_page))
        .route("/by-month", get(by_month_page))
        .route("/add", get(add_page).post(add_submit))
        .with_state(ctx)
}

async fn main_page() -> Html<String> {
    Html(pages::render_main_page())
}

async fn appointments_page(State(ctx): State<ApiContext>) -> Result<Html<String>, ApiError> {
    let conn = ctx.store()?;
    let records = repository::get_all_appointments(&conn)?;
    Ok(Html(pages::render_appointments_page(&records)))
}

async fn doctors_page(State(ctx): State<ApiContext>) -> Result<Html<String>, ApiError> {
    let conn = ctx.store()?;
    let doctors = repository::get_all_doctors(&conn)?;
    Ok(Html(pages::render_doctors_page(&doctors)))
}

async fn patients_page(State(ctx): State<ApiContext>) -> Result<Html<String>, ApiError> {
    let conn = ctx.store()?;
    let patients = repository::get_all_patients(&conn)?;
    Ok(Html(pages::render_patients_page(&patients)))
}

async fn symptoms_page(State(ctx): State<ApiContext>) -> Result<Html<String>, ApiError> {
    let conn = ctx.store()?;
    let symptoms = repository::get_all_symptoms(&conn)?;
    Ok(Html(pages::render_symptoms_page(&symptoms)))
}

async fn by_doctor_page(State(ctx): State<ApiContext>) -> Result<Html<String>, ApiError> {
    let conn = ctx.store()?;
    let groups = repository::appointments_by_doctor(&conn)?;
    Ok(Html(pages::render_by_doctor_page(&groups)))
}

async fn by_month_page(State(ctx): State<ApiContext>) -> Result<Html<String>, ApiError> {
    let conn = ctx.store()?;
    let groups = repository::appointments_by_month(&conn)?;
    Ok(Html(pages::render_by_month_page(&groups)))
}

async fn add_page() -> Html<String> {
    Html(pages::render_add_page(None))
}

#[derive(Deserialize)]
pub struct AddForm {
    first_name: Option<String>,
    last_name: Option<String>,
    gender: Option<String>,
    age: Option<String>,
    birth: Option<String>,
    doctor: Option<String>,
    month: Option<String>,
    symptom: Option<String>,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AddForm {
    /// Form validation mirrors what the API requires, plus the length
    /// cap. Returns the failure notice text on rejection.
    fn into_new_appointment(self) -> Result<NewAppointment, &'static str> {
        let (
            Some(first_name),
            Some(last_name),
            Some(gender),
            Some(age),
            Some(birth),
            Some(doctor),
            Some(month),
            Some(symptom),
        ) = (
            trimmed(self.first_name),
            trimmed(self.last_name),
            trimmed(self.gender),
            trimmed(self.age),
            trimmed(self.birth),
            trimmed(self.doctor),
            trimmed(self.month),
            trimmed(self.symptom),
        )
        else {
            return Err("You must enter all of the information!");
        };

        let fields = [
            &first_name, &last_name, &gender, &age, &birth, &doctor, &month, &symptom,
        ];
        if fields.iter().any(|f| f.chars().count() > MAX_FIELD_LEN) {
            return Err("All information must be at most 20 characters long!");
        }

        let Ok(age) = age.parse::<i64>() else {
            return Err("Age must be a whole number!");
        };

        Ok(NewAppointment {
            first_name,
            last_name,
            gender,
            age,
            birth,
            doctor,
            month,
            symptom,
        })
    }
}

async fn add_submit(
    State(ctx): State<ApiContext>,
    Form(form): Form<AddForm>,
) -> Result<Html<String>, ApiError> {
    let notice = match form.into_new_appointment() {
        Ok(new) => {
            let mut conn = ctx.store()?;
            repository::insert_appointment(&mut conn, &new)?;
            AddNotice {
                success: true,
                message: "Appointment is successfully made!",
            }
        }
        Err(message) => AddNotice {
            success: false,
            message,
        },
    };
    Ok(Html(pages::render_add_page(Some(&notice))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::db::repository::insert_appointment;
    use crate::db::sqlite::open_memory_database;

    fn test_app() -> Router {
        let conn = open_memory_database().unwrap();
        crate::api::router::app_router(ApiContext::new(conn))
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/add")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn page_text(app: Router, uri: &str) -> String {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let body = to_bytes(response.into_body(), 1 << 20).await.unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn response_text(response: axum::http::Response<Body>) -> String {
        let body = to_bytes(response.into_body(), 1 << 20).await.unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    const MINA_FORM: &str = "first_name=Mina&last_name=Lee&gender=Female&age=22\
                             &birth=1997-11-21&doctor=Amy&month=April&symptom=Headache";

    #[tokio::test]
    async fn main_page_links_the_views() {
        let page = page_text(test_app(), "/").await;
        assert!(page.contains("Wardbook"));
        for href in ["/apps", "/by-doctor", "/by-month", "/add"] {
            assert!(page.contains(&format!(r#"href="{href}""#)), "{href}");
        }
    }

    #[tokio::test]
    async fn add_form_renders() {
        let page = page_text(test_app(), "/add").await;
        assert!(page.contains(r#"name="first_name""#));
        assert!(page.contains(r#"name="symptom""#));
    }

    #[tokio::test]
    async fn valid_submission_books_and_notifies() {
        let app = test_app();

        let response = app.clone().oneshot(form_request(MINA_FORM)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let page = response_text(response).await;
        assert!(page.contains("Appointment is successfully made!"));

        let apps = page_text(app, "/apps").await;
        assert!(apps.contains("Mina"));
        assert!(apps.contains("Amy"));
    }

    #[tokio::test]
    async fn missing_field_rejected_without_writing() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(form_request("first_name=Mina&last_name=Lee"))
            .await
            .unwrap();
        let page = response_text(response).await;
        assert!(page.contains("You must enter all of the information!"));

        let apps = page_text(app, "/apps").await;
        assert!(apps.contains("No appointments recorded."));
    }

    #[tokio::test]
    async fn blank_field_counts_as_missing() {
        let app = test_app();
        let body = MINA_FORM.replace("doctor=Amy", "doctor=%20%20");

        let response = app.clone().oneshot(form_request(&body)).await.unwrap();
        let page = response_text(response).await;
        assert!(page.contains("You must enter all of the information!"));
    }

    #[tokio::test]
    async fn overlong_field_rejected() {
        let app = test_app();
        let body = MINA_FORM.replace("doctor=Amy", "doctor=Amelia-Rosalind-Riversmith");

        let response = app.clone().oneshot(form_request(&body)).await.unwrap();
        let page = response_text(response).await;
        assert!(page.contains("All information must be at most 20 characters long!"));

        let apps = page_text(app, "/apps").await;
        assert!(apps.contains("No appointments recorded."));
    }

    #[tokio::test]
    async fn non_numeric_age_rejected() {
        let app = test_app();
        let body = MINA_FORM.replace("age=22", "age=twenty-two");

        let response = app.oneshot(form_request(&body)).await.unwrap();
        let page = response_text(response).await;
        assert!(page.contains("Age must be a whole number!"));
    }

    #[tokio::test]
    async fn report_pages_group_in_order() {
        let mut conn = open_memory_database().unwrap();
        insert_appointment(
            &mut conn,
            &NewAppointment {
                first_name: "Danny".into(),
                last_name: "Park".into(),
                gender: "Male".into(),
                age: 21,
                birth: "1999-04-22".into(),
                doctor: "Robert".into(),
                month: "March".into(),
                symptom: "Knee sprain".into(),
            },
        )
        .unwrap();
        insert_appointment(
            &mut conn,
            &NewAppointment {
                first_name: "Mina".into(),
                last_name: "Lee".into(),
                gender: "Female".into(),
                age: 22,
                birth: "1997-11-21".into(),
                doctor: "Amy".into(),
                month: "April".into(),
                symptom: "Headache".into(),
            },
        )
        .unwrap();
        let app = crate::api::router::app_router(ApiContext::new(conn));

        let by_doctor = page_text(app.clone(), "/by-doctor").await;
        let amy = by_doctor.find("<h2>Amy</h2>").unwrap();
        let robert = by_doctor.find("<h2>Robert</h2>").unwrap();
        assert!(amy < robert);

        let by_month = page_text(app, "/by-month").await;
        let april = by_month.find("<h2>April</h2>").unwrap();
        let march = by_month.find("<h2>March</h2>").unwrap();
        assert!(april < march);
    }
}
