//! Test helpers: build the real router over temporary directories.
//!
//! Run from workspace root: `cargo test -p claimdesk-api --test claims_test`.

pub mod fixtures;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use bytes::Bytes;
use claimdesk_core::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test application: server plus the directories it writes to.
pub struct TestApp {
    pub server: TestServer,
    pub _temp_dir: TempDir,
    pub upload_folder: PathBuf,
    pub claims_dir: PathBuf,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn claim_file(&self, claim_id: &str) -> PathBuf {
        self.claims_dir.join(format!("{}.json", claim_id))
    }

    pub fn stored_file(&self, subdirectory: &str, saved_name: &str) -> PathBuf {
        self.upload_folder.join(subdirectory).join(saved_name)
    }
}

/// Setup test app with default limits.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {}).await
}

/// Setup test app, letting the caller adjust the configuration first.
pub async fn setup_test_app_with(customize: impl FnOnce(&mut Config)) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let upload_folder = temp_dir.path().join("uploads");
    let claims_dir = temp_dir.path().join("claims_data");

    let mut config = Config {
        upload_folder: upload_folder.clone(),
        claims_dir: claims_dir.clone(),
        ..Config::default()
    };
    customize(&mut config);

    let (_state, app) = claimdesk_api::setup::initialize_app(config)
        .await
        .expect("Failed to initialize app");

    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        _temp_dir: temp_dir,
        upload_folder,
        claims_dir,
    }
}

/// Multipart form with the three text fields.
pub fn claim_form(claim_id: &str, claim_amount: &str, description: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("claimId", claim_id)
        .add_text("claimAmount", claim_amount)
        .add_text("description", description)
}

/// File part with a name and content type.
pub fn file_part(data: Vec<u8>, filename: &str, mime_type: &str) -> Part {
    Part::bytes(Bytes::from(data))
        .file_name(filename)
        .mime_type(mime_type)
}

/// Number of entries in a directory (0 when it does not exist).
pub fn count_entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}
