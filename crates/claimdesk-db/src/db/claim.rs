use claimdesk_core::models::{ClaimRecord, ClaimSummary};
use claimdesk_core::validation::validate_claim_id;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Claim repository errors
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Invalid claim key: {0}")]
    InvalidKey(String),

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed claim document {path}: {source}")]
    Serialization {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RepositoryError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        RepositoryError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    fn serialization(path: &Path, source: serde_json::Error) -> Self {
        RepositoryError::Serialization {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for claim records, one JSON document per claim
#[derive(Clone, Debug)]
pub struct ClaimRepository {
    claims_dir: PathBuf,
}

impl ClaimRepository {
    /// Open the repository, creating `claims_dir` if needed.
    pub async fn new(claims_dir: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let claims_dir = claims_dir.into();
        fs::create_dir_all(&claims_dir)
            .await
            .map_err(|e| RepositoryError::io(&claims_dir, e))?;
        Ok(Self { claims_dir })
    }

    fn record_path(&self, claim_id: &str) -> RepositoryResult<PathBuf> {
        validate_claim_id(claim_id).map_err(|e| RepositoryError::InvalidKey(e.to_string()))?;
        Ok(self.claims_dir.join(format!("{}.json", claim_id)))
    }

    /// Persist a record, replacing any existing document with the same id.
    ///
    /// The document is written to a hidden temporary file unique to this call
    /// and renamed into place, so readers never observe a partially written
    /// record and concurrent saves of one id never share a temporary file.
    #[tracing::instrument(skip(self, record), fields(claim_id = %record.claim_id))]
    pub async fn save(&self, record: &ClaimRecord) -> RepositoryResult<()> {
        let path = self.record_path(&record.claim_id)?;
        let tmp_path = self.claims_dir.join(format!(
            ".{}.{}.json.tmp",
            record.claim_id,
            Uuid::new_v4().simple()
        ));

        let body =
            serde_json::to_vec_pretty(record).map_err(|e| RepositoryError::serialization(&path, e))?;

        let mut file = fs::File::create(&tmp_path)
            .await
            .map_err(|e| RepositoryError::io(&tmp_path, e))?;
        file.write_all(&body)
            .await
            .map_err(|e| RepositoryError::io(&tmp_path, e))?;
        file.sync_all()
            .await
            .map_err(|e| RepositoryError::io(&tmp_path, e))?;
        drop(file);

        if let Err(e) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(RepositoryError::io(&path, e));
        }

        tracing::info!(
            path = %path.display(),
            files_count = record.uploaded_files.len(),
            "Claim record saved"
        );
        Ok(())
    }

    /// Load a record by id. `None` when no document exists.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self, claim_id: &str) -> RepositoryResult<Option<ClaimRecord>> {
        let path = self.record_path(claim_id)?;

        let body = match fs::read(&path).await {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RepositoryError::io(&path, e)),
        };

        let record =
            serde_json::from_slice(&body).map_err(|e| RepositoryError::serialization(&path, e))?;
        Ok(Some(record))
    }

    /// Summaries of every stored claim, newest submission first.
    ///
    /// A single unreadable or malformed document fails the whole listing.
    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> RepositoryResult<Vec<ClaimSummary>> {
        let mut entries = match fs::read_dir(&self.claims_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RepositoryError::io(&self.claims_dir, e)),
        };

        let mut summaries = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RepositoryError::io(&self.claims_dir, e))?
        {
            let path = entry.path();
            let is_record = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(".json") && !n.starts_with('.'));
            if !is_record {
                continue;
            }

            let body = fs::read(&path)
                .await
                .map_err(|e| RepositoryError::io(&path, e))?;
            let record: ClaimRecord = serde_json::from_slice(&body)
                .map_err(|e| RepositoryError::serialization(&path, e))?;
            summaries.push(ClaimSummary::from(&record));
        }

        summaries.sort_by(|a, b| b.submission_time.cmp(&a.submission_time));

        tracing::debug!(count = summaries.len(), "Listed claim records");
        Ok(summaries)
    }

    /// Verify the claims directory is present
    pub async fn check_health(&self) -> RepositoryResult<()> {
        let meta = fs::metadata(&self.claims_dir)
            .await
            .map_err(|e| RepositoryError::io(&self.claims_dir, e))?;
        if !meta.is_dir() {
            return Err(RepositoryError::io(
                &self.claims_dir,
                std::io::Error::other("not a directory"),
            ));
        }
        Ok(())
    }
}
