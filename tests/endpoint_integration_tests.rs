/// Endpoint smoke tests against a running clinic API.
///
/// Start the server (`cargo run -p clinic-api`), then run
/// `cargo run -p endpoint-integration-tests`. `CLINIC_API_URL` overrides the
/// default base URL.
///
/// Test Categories:
/// - Doctor lifecycle (create, read, replace, delete)
/// - Patient upsert through PUT
/// - Appointment cascade to patient and doctor
/// - Error handling and edge cases

use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000";

pub struct ApiTestClient {
    client: Client,
    base_url: String,
}

impl ApiTestClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: std::env::var("CLINIC_API_URL").unwrap_or_else(|_| BASE_URL.to_string()),
        }
    }

    pub async fn get(&self, path: &str) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(self.client.get(format!("{}{}", self.base_url, path)).send().await?)
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await?)
    }

    pub async fn put(&self, path: &str, body: Value) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(self
            .client
            .put(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await?)
    }

    pub async fn delete(&self, path: &str) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(self.client.delete(format!("{}{}", self.base_url, path)).send().await?)
    }

    /// Turns an absolute `href` from a response back into a path on this server.
    pub fn local_path<'a>(&self, href: &'a str) -> &'a str {
        match href.find("://") {
            Some(scheme_end) => {
                let rest = &href[scheme_end + 3..];
                rest.find('/').map(|i| &rest[i..]).unwrap_or("/")
            }
            None => href,
        }
    }
}

impl Default for ApiTestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct TestResults {
    pub passed: u32,
    pub failed: u32,
    pub failures: Vec<String>,
}

impl TestResults {
    pub fn pass(&mut self, test_name: &str) {
        self.passed += 1;
        println!("✅ {}", test_name);
    }

    pub fn fail(&mut self, test_name: &str, error: &str) {
        self.failed += 1;
        self.failures.push(format!("{}: {}", test_name, error));
        println!("❌ {}: {}", test_name, error);
    }

    pub fn check(&mut self, test_name: &str, ok: bool, detail: impl FnOnce() -> String) {
        if ok {
            self.pass(test_name);
        } else {
            self.fail(test_name, &detail());
        }
    }

    pub fn summary(&self) {
        println!("\n📊 Test Summary:");
        println!("✅ Passed: {}", self.passed);
        println!("❌ Failed: {}", self.failed);

        if !self.failures.is_empty() {
            println!("\n🔍 Failures:");
            for failure in &self.failures {
                println!("  - {}", failure);
            }
        }
    }
}

async fn json_of(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.json::<Value>().await.unwrap_or(Value::Null);
    (status, body)
}

pub async fn run_endpoint_tests() -> Result<TestResults, Box<dyn std::error::Error>> {
    let client = ApiTestClient::new();
    let mut results = TestResults::default();

    println!("🚀 Starting Endpoint Integration Tests");
    println!("📍 Base URL: {}", client.base_url);

    let response = client.get("/").await?;
    results.check("API Root", response.status() == StatusCode::OK, || {
        format!("Status: {}", response.status())
    });

    // DOCTOR LIFECYCLE
    println!("\n👨‍⚕️ Doctor Tests");

    let (status, created) = json_of(
        client
            .post(
                "/doctors",
                json!({
                    "firstName": "Anna",
                    "surname": "Petrova",
                    "phoneNumber": "12345",
                    "specialty": "Cardiology"
                }),
            )
            .await?,
    )
    .await;
    let doctor_id = created["id"].as_i64().unwrap_or_default();
    results.check("Create Doctor", status == StatusCode::OK && doctor_id > 0, || {
        format!("Status: {}, body: {}", status, created)
    });

    let (status, fetched) = json_of(client.get(&format!("/doctors/{}", doctor_id)).await?).await;
    results.check(
        "Read Doctor",
        status == StatusCode::OK && fetched["surname"] == "Petrova",
        || format!("Status: {}, body: {}", status, fetched),
    );

    match fetched["_links"]["self"]["href"].as_str() {
        Some(href) => {
            let (status, via_link) = json_of(client.get(client.local_path(href)).await?).await;
            results.check(
                "Doctor Self Link Resolves",
                status == StatusCode::OK && via_link["id"] == fetched["id"],
                || format!("Status: {}", status),
            );
        }
        None => results.fail("Doctor Self Link Resolves", "missing _links.self"),
    }

    let (status, replaced) = json_of(
        client
            .put(
                &format!("/doctors/{}", doctor_id),
                json!({
                    "firstName": "Anna",
                    "surname": "Petrova-Smith",
                    "phoneNumber": "12345",
                    "specialty": "Cardiology"
                }),
            )
            .await?,
    )
    .await;
    results.check(
        "Replace Doctor",
        status == StatusCode::OK
            && replaced["id"].as_i64() == Some(doctor_id)
            && replaced["surname"] == "Petrova-Smith",
        || format!("Status: {}, body: {}", status, replaced),
    );

    let response = client.delete(&format!("/doctors/{}", doctor_id)).await?;
    results.check("Delete Doctor", response.status() == StatusCode::OK, || {
        format!("Status: {}", response.status())
    });

    let response = client.get(&format!("/doctors/{}", doctor_id)).await?;
    results.check(
        "Deleted Doctor Is Not Found",
        response.status() == StatusCode::NOT_FOUND,
        || format!("Status: {}", response.status()),
    );

    let response = client.delete(&format!("/doctors/{}", doctor_id)).await?;
    results.check("Repeat Delete Succeeds", response.status() == StatusCode::OK, || {
        format!("Status: {}", response.status())
    });

    // PATIENT UPSERT
    println!("\n🧑 Patient Tests");

    let (status, upserted) = json_of(
        client
            .put(
                "/patients/9001",
                json!({
                    "firstName": "Jonas",
                    "surname": "Kazlauskas",
                    "age": 41,
                    "phoneNumber": "+37060000000",
                    "email": "jonas@example.com"
                }),
            )
            .await?,
    )
    .await;
    results.check(
        "Put Creates Patient At Path Id",
        status == StatusCode::OK && upserted["id"] == 9001,
        || format!("Status: {}, body: {}", status, upserted),
    );

    let (status, list) = json_of(client.get("/patients").await?).await;
    let listed = list["_embedded"]["patientList"]
        .as_array()
        .map(|items| items.iter().any(|p| p["id"] == 9001))
        .unwrap_or(false);
    results.check("List Patients", status == StatusCode::OK && listed, || {
        format!("Status: {}, body: {}", status, list)
    });

    client.delete("/patients/9001").await?;

    // APPOINTMENT CASCADE
    println!("\n📅 Appointment Tests");

    let (status, appointment) = json_of(
        client
            .post(
                "/appointments",
                json!({
                    "type": "Routine Check",
                    "date": "2024-05-14T09:30:00Z",
                    "patient": { "firstName": "Ona", "surname": "Petraitiene", "age": 35 },
                    "doctor": { "firstName": "Tomas", "surname": "Jankus", "specialty": "Neurology" }
                }),
            )
            .await?,
    )
    .await;
    let patient_id = appointment["patient"]["id"].as_i64().unwrap_or_default();
    results.check(
        "Create Appointment Cascades",
        status == StatusCode::OK && patient_id > 0,
        || format!("Status: {}, body: {}", status, appointment),
    );

    let response = client.get(&format!("/patients/{}", patient_id)).await?;
    results.check(
        "Cascaded Patient Is Readable",
        response.status() == StatusCode::OK,
        || format!("Status: {}", response.status()),
    );

    // ERROR HANDLING
    println!("\n⚠️ Error Handling Tests");

    let response = client.post("/doctors", json!({ "surname": 42 })).await?;
    results.check(
        "Malformed Body Is Client Error",
        response.status().is_client_error(),
        || format!("Status: {}", response.status()),
    );

    let response = client.get("/appointments/not-a-number").await?;
    results.check(
        "Non-numeric Id Is Client Error",
        response.status() == StatusCode::BAD_REQUEST,
        || format!("Status: {}", response.status()),
    );

    Ok(results)
}

/// Entry point for endpoint tests
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let results = run_endpoint_tests().await?;
    results.summary();

    if results.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_path_strips_origin() {
        let client = ApiTestClient::new();

        assert_eq!(client.local_path("http://localhost:3000/doctors/1"), "/doctors/1");
        assert_eq!(client.local_path("https://clinic.example.com"), "/");
        assert_eq!(client.local_path("/patients"), "/patients");
    }

    #[test]
    fn test_results_track_failures() {
        let mut results = TestResults::default();

        results.check("ok", true, String::new);
        results.check("broken", false, || "Status: 500".to_string());

        assert_eq!(results.passed, 1);
        assert_eq!(results.failed, 1);
        assert_eq!(results.failures, vec!["broken: Status: 500".to_string()]);
    }
}
