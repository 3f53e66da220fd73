pub mod upload;

pub use upload::{IncomingFile, UploadRequest};
