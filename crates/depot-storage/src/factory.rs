use crate::{DiskStorage, UploadStorage};
use depot_core::UploadConfig;
use std::sync::Arc;

/// Create the upload placement backend for the given configuration.
///
/// This is the composition root embedding applications are expected to
/// call. The destination directory is not created here; deployments
/// provision it out-of-band before accepting uploads.
pub fn create_storage(config: &UploadConfig) -> Arc<dyn UploadStorage> {
    tracing::info!(
        path = %config.upload_dir().display(),
        "Using disk upload storage"
    );

    Arc::new(DiskStorage::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::{IncomingFile, UploadRequest};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_create_storage_resolves_against_configured_dir() {
        let dir = tempdir().unwrap();
        let storage = create_storage(&UploadConfig::new(dir.path()));

        let dest = storage
            .resolve_destination(&UploadRequest::default(), &IncomingFile::default())
            .await
            .unwrap();

        assert_eq!(dest, dir.path());
    }
}
