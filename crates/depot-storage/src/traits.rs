//! Upload placement trait
//!
//! This module defines the UploadStorage trait that placement backends
//! implement, and the error surface reported back to the framework.

use async_trait::async_trait;
use depot_core::{IncomingFile, UploadRequest};
use std::path::PathBuf;
use thiserror::Error;

/// Placement resolution errors
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("Entropy source failed: {0}")]
    EntropyFailure(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for placement resolution
pub type ResolverResult<T> = Result<T, ResolverError>;

/// Upload placement contract consumed by the multipart framework.
///
/// The framework calls both methods once per uploaded file, then performs
/// the stream-to-disk write itself. Invocations are stateless and
/// independent; concurrent uploads share nothing but the read-only
/// destination directory, so no ordering between them is guaranteed or
/// required. A resolution either completes with a value or fails with an
/// error, with no partial effects.
#[async_trait]
pub trait UploadStorage: Send + Sync {
    /// Directory the framework should write the file into.
    ///
    /// Constant for the lifetime of the resolver and independent of the
    /// request contents. Performs no I/O and does not create the
    /// directory; provisioning it is the deployment's responsibility.
    async fn resolve_destination(
        &self,
        request: &UploadRequest,
        file: &IncomingFile,
    ) -> ResolverResult<PathBuf>;

    /// Name the framework should write the file under.
    ///
    /// 24 lowercase hex characters of fresh randomness followed by the
    /// preserved extension of the client filename. Fails only when the
    /// entropy source cannot supply bytes; the framework is expected to
    /// abort the upload on error.
    async fn resolve_filename(
        &self,
        request: &UploadRequest,
        file: &IncomingFile,
    ) -> ResolverResult<String>;
}
