use std::process::{Command, Output};

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BINARY: &str = env!("CARGO_BIN_EXE_tugas-form");

fn unique_temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("tugas-form-{}-{}", std::process::id(), name))
}

async fn run_binary(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        Command::new(BINARY)
            .args(&args)
            .env("RUST_LOG", "error") // Reduce log output for test
            .output()
            .expect("Failed to start tugas-form binary")
    })
    .await
    .expect("binary task panicked")
}

#[tokio::test]
async fn add_with_empty_name_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_binary(vec![
        "--base-url".into(),
        server.uri(),
        "--config".into(),
        unique_temp_path("absent.yaml").display().to_string(),
        "add".into(),
        "--date".into(),
        "2024-06-01".into(),
    ])
    .await;

    assert!(!output.status.success(), "validation failure must exit non-zero");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Nama tugas dan tanggal deadline wajib diisi."),
        "stderr: {stderr}"
    );
}

#[tokio::test]
async fn add_posts_task_and_reports_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(body_json(serde_json::json!({
            "name": "UTS SDA",
            "deadlineDate": "2024-06-01",
            "deadlineTime": "08:00",
            "attachmentLink": "",
            "submitLink": "",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_binary(vec![
        "--base-url".into(),
        server.uri(),
        "--config".into(),
        unique_temp_path("absent.yaml").display().to_string(),
        "add".into(),
        "--name".into(),
        "UTS SDA".into(),
        "--date".into(),
        "2024-06-01".into(),
        "--time".into(),
        "08:00".into(),
    ])
    .await;

    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Tugas berhasil ditambahkan."), "stdout: {stdout}");
}

#[tokio::test]
async fn add_shows_server_message_on_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({ "message": "Duplicate task" })),
        )
        .mount(&server)
        .await;

    let output = run_binary(vec![
        "--base-url".into(),
        server.uri(),
        "--config".into(),
        unique_temp_path("absent.yaml").display().to_string(),
        "add".into(),
        "--name".into(),
        "UTS SDA".into(),
        "--date".into(),
        "2024-06-01".into(),
    ])
    .await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Duplicate task"), "stderr: {stderr}");
}

#[test]
fn init_config_writes_default_yaml() {
    let output_path = unique_temp_path("init/config.yaml");
    let _ = std::fs::remove_file(&output_path);

    let output = Command::new(BINARY)
        .arg("init-config")
        .arg("--output")
        .arg(&output_path)
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to start tugas-form binary");

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let written = std::fs::read_to_string(&output_path).expect("config written");
    assert!(written.contains("base_url:"));
    assert!(written.contains("http://localhost:3000"));

    let again = Command::new(BINARY)
        .arg("init-config")
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("Failed to start tugas-form binary");
    assert!(!again.status.success(), "existing config must not be overwritten");

    let _ = std::fs::remove_file(&output_path);
}
