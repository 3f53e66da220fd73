//! Per-upload random tokens.
//!
//! Every uploaded file is stored under a fresh token so client-supplied
//! names never reach the filesystem. Tokens carry 96 bits of randomness;
//! uniqueness is statistical and no collision check is performed.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Number of random bytes in an upload token.
pub const TOKEN_LEN: usize = 12;

/// Length of the lowercase hex rendering of an upload token.
pub const TOKEN_HEX_LEN: usize = TOKEN_LEN * 2;

/// A per-upload random token, rendered as 24 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadToken([u8; TOKEN_LEN]);

impl UploadToken {
    /// Wrap raw bytes into a token. Callers are responsible for drawing
    /// the bytes from a cryptographically secure source.
    pub fn from_bytes(bytes: [u8; TOKEN_LEN]) -> Self {
        UploadToken(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; TOKEN_LEN] {
        &self.0
    }

    /// Lowercase hex rendering, always `TOKEN_HEX_LEN` characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Display for UploadToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_rendering_is_lowercase_and_fixed_width() {
        let token = UploadToken::from_bytes([0xAB; TOKEN_LEN]);
        let hex = token.to_hex();
        assert_eq!(hex.len(), TOKEN_HEX_LEN);
        assert_eq!(hex, "abababababababababababab");
    }

    #[test]
    fn test_display_matches_to_hex() {
        let token = UploadToken::from_bytes([
            0x3f, 0x2a, 0x9c, 0x1d, 0x4e, 0x5b, 0x6a, 0x7f, 0x80, 0x91, 0xa2, 0xb3,
        ]);
        assert_eq!(token.to_string(), "3f2a9c1d4e5b6a7f8091a2b3");
        assert_eq!(token.to_string(), token.to_hex());
    }

    #[test]
    fn test_leading_zero_bytes_are_preserved() {
        let mut bytes = [0u8; TOKEN_LEN];
        bytes[TOKEN_LEN - 1] = 0x01;
        let token = UploadToken::from_bytes(bytes);
        assert_eq!(token.to_hex(), "000000000000000000000001");
    }
}
