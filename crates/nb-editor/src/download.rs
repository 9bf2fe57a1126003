//! Saving an image node's payload to disk.
//!
//! Failures here never reach the user as notices; [`save`] logs them.

use nb_core::id::NodeId;
use nb_core::image::{DEFAULT_MIME, ImageError, ImageSource, file_extension};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("decode failed: {0}")]
    Decode(#[from] ImageError),

    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("fetch returned status {0}")]
    Status(u16),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Debounce ────────────────────────────────────────────────────────────

/// Per-node minimum interval between downloads, absorbing duplicate
/// clicks. Timestamp based, so it is a heuristic rather than a lock.
#[derive(Debug, Clone)]
pub struct DownloadDebouncer {
    interval: Duration,
    last: HashMap<NodeId, Instant>,
}

impl DownloadDebouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: HashMap::new(),
        }
    }

    /// Whether a download of `node` may start at `now`; records `now` if so.
    pub fn try_acquire(&mut self, node: NodeId, now: Instant) -> bool {
        if let Some(prev) = self.last.get(&node)
            && now.saturating_duration_since(*prev) < self.interval
        {
            log::debug!("download of {node} debounced");
            return false;
        }
        self.last.insert(node, now);
        true
    }

    pub fn forget(&mut self, node: NodeId) {
        self.last.remove(&node);
    }
}

// ─── Resolution ──────────────────────────────────────────────────────────

/// A download the editor approved: which node, what to save, and the name
/// the caller asked for (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub node: NodeId,
    pub source: ImageSource,
    pub file_name: Option<String>,
}

/// Resolved bytes ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DownloadFile {
    /// Write into `dir`, returning the full path.
    pub async fn save_in(&self, dir: impl AsRef<Path>) -> Result<PathBuf, DownloadError> {
        let path = dir.as_ref().join(&self.file_name);
        tokio::fs::write(&path, &self.bytes).await?;
        Ok(path)
    }
}

/// `image-<unix millis>.<ext>`.
pub fn default_file_name(mime: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("image-{millis}.{}", file_extension(mime))
}

/// Turn the request into bytes: decode an embedded payload, or fetch a
/// remote reference (taking its MIME type from `Content-Type`).
pub async fn resolve(
    request: &DownloadRequest,
    http: &reqwest::Client,
) -> Result<DownloadFile, DownloadError> {
    let (mime_type, bytes) = match &request.source {
        ImageSource::Embedded(inline) => (inline.mime_type.clone(), inline.decode()?),
        ImageSource::Remote(url) => {
            let response = http.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(DownloadError::Status(status.as_u16()));
            }
            let mime = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_MIME.to_string());
            (mime, response.bytes().await?.to_vec())
        }
    };
    let file_name = request
        .file_name
        .clone()
        .unwrap_or_else(|| default_file_name(&mime_type));
    Ok(DownloadFile {
        file_name,
        mime_type,
        bytes,
    })
}

/// Resolve and write into `dir`. Errors are logged and swallowed.
pub async fn save(
    request: &DownloadRequest,
    http: &reqwest::Client,
    dir: impl AsRef<Path>,
) -> Option<PathBuf> {
    let result = match resolve(request, http).await {
        Ok(file) => file.save_in(dir).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(path) => {
            log::debug!("downloaded {} to {}", request.node, path.display());
            Some(path)
        }
        Err(e) => {
            log::error!("download of {} failed: {e}", request.node);
            None
        }
    }
}
