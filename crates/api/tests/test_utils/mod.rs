#![allow(dead_code)]

use std::sync::Arc;

use axum_test::{TestResponse, TestServer};
use serde_json::{Value, json};
use slotbook_api::ApiState;
use slotbook_core::store::AppointmentStore;
use slotbook_db::mock::InMemoryAppointmentStore;

pub const TEST_DATE: &str = "2031-05-15";

pub struct TestContext {
    pub store: Arc<InMemoryAppointmentStore>,
    pub server: TestServer,
}

impl TestContext {
    /// Server backed by an empty in-memory store.
    pub fn new() -> Self {
        let store = Arc::new(InMemoryAppointmentStore::new());
        let server = build_server(store.clone());
        Self { store, server }
    }

    pub async fn slots(&self, date: &str) -> TestResponse {
        self.server
            .get("/available-slots/")
            .add_query_param("date", date)
            .await
    }

    pub async fn slot_labels(&self, date: &str) -> Vec<String> {
        let body: Value = self.slots(date).await.json();
        serde_json::from_value(body["available_slots"].clone()).unwrap()
    }

    pub async fn book(&self, payload: Value) -> TestResponse {
        self.server.post("/book-appointment/").json(&payload).await
    }

    pub async fn book_at(&self, date: &str, time: &str) -> TestResponse {
        self.book(booking(date, time)).await
    }
}

/// Server over any store, e.g. a mock.
pub fn build_server(store: Arc<dyn AppointmentStore>) -> TestServer {
    let state = Arc::new(ApiState { store });
    TestServer::new(slotbook_api::app(state)).unwrap()
}

pub fn booking(date: &str, time: &str) -> Value {
    json!({
        "name": "John Doe",
        "phone": "1234567890",
        "date": date,
        "time": time,
    })
}

pub fn error_of(response: &TestResponse) -> String {
    let body: Value = response.json();
    body["error"].as_str().unwrap_or_default().to_string()
}
