use crate::entropy::{EntropySource, OsEntropy};
use crate::traits::{ResolverResult, UploadStorage};
use async_trait::async_trait;
use depot_core::{
    resolved_filename, IncomingFile, UploadConfig, UploadRequest, UploadToken, TOKEN_LEN,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Disk-backed upload placement.
///
/// Every upload resolves to the same configured directory; filenames are
/// fresh random tokens with the client extension preserved.
#[derive(Clone)]
pub struct DiskStorage {
    upload_dir: PathBuf,
    entropy: Arc<dyn EntropySource>,
}

impl DiskStorage {
    /// Create a new DiskStorage backed by the OS CSPRNG.
    ///
    /// The destination directory is taken from `config` and is not
    /// created here.
    pub fn new(config: &UploadConfig) -> Self {
        Self::with_entropy(config, Arc::new(OsEntropy))
    }

    /// Create a DiskStorage with an alternate entropy source.
    pub fn with_entropy(config: &UploadConfig, entropy: Arc<dyn EntropySource>) -> Self {
        DiskStorage {
            upload_dir: config.upload_dir.clone(),
            entropy,
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }
}

#[async_trait]
impl UploadStorage for DiskStorage {
    async fn resolve_destination(
        &self,
        request: &UploadRequest,
        _file: &IncomingFile,
    ) -> ResolverResult<PathBuf> {
        tracing::debug!(
            request_id = ?request.request_id,
            path = %self.upload_dir.display(),
            "Resolved upload destination"
        );

        Ok(self.upload_dir.clone())
    }

    async fn resolve_filename(
        &self,
        request: &UploadRequest,
        file: &IncomingFile,
    ) -> ResolverResult<String> {
        let mut bytes = [0u8; TOKEN_LEN];
        self.entropy.fill(&mut bytes)?;
        let token = UploadToken::from_bytes(bytes);

        let filename = resolved_filename(&token, file.original_name.as_deref());

        tracing::debug!(
            request_id = ?request.request_id,
            original_name = ?file.original_name,
            filename = %filename,
            "Resolved upload filename"
        );

        Ok(filename)
    }
}
