//! Stored filename resolution.
//!
//! The stored name is the upload token's hex rendering with the client
//! filename's extension appended, e.g. `3f2a9c1d4e5b6a7f8091a2b3.png`.
//! Only the extension of the client name is kept; everything else is
//! untrusted and discarded.

use crate::token::UploadToken;

/// Extract the extension of `name`, leading dot included.
///
/// The extension runs from the last `.` of the basename to the end of the
/// string, case preserved. A dot that starts the basename (dotfiles such
/// as `.gitignore`) is not an extension separator, and names consisting
/// only of dots have no extension. Returns the empty string when no
/// extension is present.
pub fn file_extension(name: &str) -> &str {
    let basename = match name.rfind(['/', '\\']) {
        Some(idx) => &name[idx + 1..],
        None => name,
    };

    if basename.chars().all(|c| c == '.') {
        return "";
    }

    match basename.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &basename[idx..],
    }
}

/// Compose the stored filename for a token and an optional client name.
pub fn resolved_filename(token: &UploadToken, original_name: Option<&str>) -> String {
    let extension = original_name.map(file_extension).unwrap_or("");
    format!("{}{}", token, extension)
}
