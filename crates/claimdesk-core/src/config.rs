//! Configuration module
//!
//! Settings are read once from the environment (optionally seeded from a `.env`
//! file) into an explicit `Config` value that is passed to the file store, the
//! claim repository and the router at construction.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;
const MAX_CONTENT_LENGTH_MB: usize = 16;
const UPLOAD_FOLDER: &str = "uploads";
const CLAIMS_DIR: &str = "claims_data";
const DOCUMENT_ALLOWED_EXTENSIONS: &str = "pdf";
const IMAGE_ALLOWED_EXTENSIONS: &str = "png,jpg,jpeg,gif";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// Root of the attachment tree (`pdfs/` and `images/` live underneath)
    pub upload_folder: PathBuf,
    /// Directory holding one JSON document per claim
    pub claims_dir: PathBuf,
    /// Ceiling for a whole request body, all attachments combined
    pub max_content_length_bytes: usize,
    pub document_allowed_extensions: Vec<String>,
    pub image_allowed_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_port: DEFAULT_PORT,
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            upload_folder: PathBuf::from(UPLOAD_FOLDER),
            claims_dir: PathBuf::from(CLAIMS_DIR),
            max_content_length_bytes: MAX_CONTENT_LENGTH_MB * 1024 * 1024,
            document_allowed_extensions: parse_list(DOCUMENT_ALLOWED_EXTENSIONS),
            image_allowed_extensions: parse_list(IMAGE_ALLOWED_EXTENSIONS),
        }
    }
}

impl Config {
    /// Load configuration using the development port default (5000).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_env_with_default_port(DEFAULT_PORT)
    }

    /// Load configuration, falling back to `default_port` when `PORT` is unset.
    pub fn from_env_with_default_port(default_port: u16) -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let server_port = match env::var("PORT") {
            Ok(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            Err(_) => default_port,
        };

        let max_content_length_mb = env::var("MAX_CONTENT_LENGTH_MB")
            .unwrap_or_else(|_| MAX_CONTENT_LENGTH_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_CONTENT_LENGTH_MB);

        let config = Config {
            server_port,
            environment,
            cors_origins: parse_list(&env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string())),
            upload_folder: env::var("UPLOAD_FOLDER")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(UPLOAD_FOLDER)),
            claims_dir: env::var("CLAIMS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(CLAIMS_DIR)),
            max_content_length_bytes: max_content_length_mb * 1024 * 1024,
            document_allowed_extensions: parse_list(
                &env::var("DOCUMENT_ALLOWED_EXTENSIONS")
                    .unwrap_or_else(|_| DOCUMENT_ALLOWED_EXTENSIONS.to_string()),
            ),
            image_allowed_extensions: parse_list(
                &env::var("IMAGE_ALLOWED_EXTENSIONS")
                    .unwrap_or_else(|_| IMAGE_ALLOWED_EXTENSIONS.to_string()),
            ),
        };

        Ok(config)
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("PORT must be greater than zero"));
        }

        if self.max_content_length_bytes == 0 {
            return Err(anyhow::anyhow!(
                "MAX_CONTENT_LENGTH_MB must be greater than zero"
            ));
        }

        if self.document_allowed_extensions.is_empty() || self.image_allowed_extensions.is_empty()
        {
            return Err(anyhow::anyhow!(
                "DOCUMENT_ALLOWED_EXTENSIONS and IMAGE_ALLOWED_EXTENSIONS must not be empty"
            ));
        }

        if let Some(shared) = self
            .document_allowed_extensions
            .iter()
            .find(|ext| self.image_allowed_extensions.contains(ext))
        {
            return Err(anyhow::anyhow!(
                "Extension '{}' cannot be both a document and an image extension",
                shared
            ));
        }

        Ok(())
    }
}

/// Split a comma-separated setting into trimmed, lowercased, non-empty entries.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
