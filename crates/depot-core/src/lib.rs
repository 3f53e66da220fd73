//! Depot Core Library
//!
//! This crate provides the domain models, configuration, and filename
//! primitives shared across all depot components.
//!
//! # Stored filename format
//!
//! Uploaded files are written under `{token_hex}{extension}` where
//! `token_hex` is 24 lowercase hexadecimal characters (12 random bytes)
//! and `extension` is the client filename's extension, dot included, or
//! empty when the client name has none.

pub mod config;
pub mod filename;
pub mod models;
pub mod token;

// Re-export commonly used types
pub use config::UploadConfig;
pub use filename::{file_extension, resolved_filename};
pub use models::{IncomingFile, UploadRequest};
pub use token::{UploadToken, TOKEN_HEX_LEN, TOKEN_LEN};
