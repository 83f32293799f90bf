/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for tugas-adapter tests

use tugas_adapter::{ClientConfig, CreateTaskRequest, TugasClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> TugasClient {
    TugasClient::with_config(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    })
    .expect("client init")
}

/// Fully populated draft task
pub fn full_request() -> CreateTaskRequest {
    CreateTaskRequest {
        name: "Laporan Praktikum".to_string(),
        deadline_date: "2024-06-10".to_string(),
        deadline_time: "23:59".to_string(),
        attachment_link: "https://drive.google.com/file/d/abc".to_string(),
        submit_link: "https://spot.upi.edu/tugas/42".to_string(),
    }
}
