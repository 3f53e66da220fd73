//! Entropy source seam.
//!
//! Token bytes come through this trait so the resolver never touches the
//! OS RNG directly; tests swap in a failing source to exercise the error
//! path the framework sees when entropy is unavailable.

use crate::traits::{ResolverError, ResolverResult};
use rand::rngs::OsRng;
use rand::TryRngCore;

/// Source of random bytes for upload tokens.
pub trait EntropySource: Send + Sync {
    /// Fill `buf` entirely with random bytes, or fail without writing a
    /// partial token.
    fn fill(&self, buf: &mut [u8]) -> ResolverResult<()>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> ResolverResult<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| ResolverError::EntropyFailure(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_entropy_fills_buffer() {
        let mut buf = [0u8; 32];
        OsEntropy.fill(&mut buf).unwrap();
        // 32 zero bytes from a healthy CSPRNG is a 2^-256 event.
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_os_entropy_draws_are_independent() {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        OsEntropy.fill(&mut a).unwrap();
        OsEntropy.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }
}
