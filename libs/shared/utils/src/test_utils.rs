
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request},
    response::Response,
};
use serde_json::{json, Value};

use shared_config::{AppConfig, StorageBackend};

pub const TEST_BASE_URL: &str = "http://localhost:3000";

pub struct TestConfig {
    pub public_base_url: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            public_base_url: TEST_BASE_URL.to_string(),
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_supabase_url(url: &str) -> Self {
        Self {
            supabase_url: url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            storage_backend: StorageBackend::Memory,
            supabase_url: self.supabase_url.clone(),
            supabase_anon_key: self.supabase_anon_key.clone(),
            public_base_url: self.public_base_url.clone(),
            ..AppConfig::default()
        }
    }
}

/// Routes test output through the libtest capture. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Reads the body as JSON; an empty body yields `Value::Null`.
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    }
}

pub fn href(path: &str) -> String {
    format!("{}{}", TEST_BASE_URL, path)
}

/// Request bodies in the public camelCase wire format.
pub struct TestBodies;

impl TestBodies {
    pub fn patient(first_name: &str, surname: &str, age: i32) -> Value {
        json!({
            "firstName": first_name,
            "surname": surname,
            "age": age,
            "phoneNumber": "+37060000000",
            "email": format!("{}@example.com", first_name.to_lowercase())
        })
    }

    pub fn doctor(first_name: &str, surname: &str, specialty: &str) -> Value {
        json!({
            "firstName": first_name,
            "surname": surname,
            "phoneNumber": "12345",
            "specialty": specialty
        })
    }

    pub fn appointment(kind: &str, date: &str, patient: Value, doctor: Value) -> Value {
        json!({
            "type": kind,
            "date": date,
            "patient": patient,
            "doctor": doctor
        })
    }
}

/// Rows as PostgREST returns them from the clinic tables.
pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    pub fn patient_row(id: i32, first_name: &str, surname: &str) -> Value {
        json!({
            "id": id,
            "first_name": first_name,
            "surname": surname,
            "age": 41,
            "phone_number": "+37060000000",
            "email": format!("{}@example.com", first_name.to_lowercase())
        })
    }

    pub fn doctor_row(id: i32, first_name: &str, surname: &str, specialty: &str) -> Value {
        json!({
            "id": id,
            "first_name": first_name,
            "surname": surname,
            "phone_number": "12345",
            "specialty": specialty
        })
    }

    pub fn appointment_row(id: i32, patient_id: i32, doctor_id: i32) -> Value {
        json!({
            "id": id,
            "type": "Routine Check",
            "date": "2024-05-14T09:30:00Z",
            "patient_id": patient_id,
            "doctor_id": doctor_id
        })
    }

    /// Appointment row with its patient and doctor embedded, as returned by
    /// `select=*,patient:patients(*),doctor:doctors(*)`.
    pub fn appointment_row_embedded(id: i32, patient: Value, doctor: Value) -> Value {
        let patient_id = patient["id"].clone();
        let doctor_id = doctor["id"].clone();
        json!({
            "id": id,
            "type": "Routine Check",
            "date": "2024-05-14T09:30:00Z",
            "patient_id": patient_id,
            "doctor_id": doctor_id,
            "patient": patient,
            "doctor": doctor
        })
    }

    pub fn error_response(message: &str, code: &str) -> Value {
        json!({
            "message": message,
            "code": code
        })
    }
}
