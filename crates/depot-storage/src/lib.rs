//! Depot Storage Library
//!
//! Upload placement for multipart-handling frameworks: which directory an
//! uploaded file lands in and the randomized name it is written under.
//! The framework performs the actual byte transfer; this crate only
//! resolves placement.
//!
//! # Stored filename format
//!
//! `{24 lowercase hex chars}{extension}` where the extension is taken
//! from the client filename, dot included, or empty when the client name
//! has none. See the `depot-core` crate documentation.

pub mod disk;
pub mod entropy;
pub mod factory;
pub mod traits;

// Re-export commonly used types
pub use disk::DiskStorage;
pub use entropy::{EntropySource, OsEntropy};
pub use factory::create_storage;
pub use traits::{ResolverError, ResolverResult, UploadStorage};
