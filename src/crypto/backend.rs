//! Explicit crypto backend handle.
//!
//! Per the design note in specification §9 ("Global security-provider
//! singleton... replace with an explicit CryptoBackend handle passed into
//! the verifier at construction"), this crate never reaches for a
//! process-wide provider. A `CryptoBackend` is constructed once per
//! validation session and threaded into every token/signature constructor
//! that needs to hash or verify.

use std::sync::Arc;

use crate::crypto::digest::DigestAlgorithm;
use crate::crypto::signature::{PublicKey, SignatureAlgorithm};
use crate::error::{CoreError, SignatureVerificationError};

/// A cryptographic backend capable of hashing and signature verification.
/// The default backend (`CryptoBackend::default()`) uses the pure-Rust
/// RustCrypto stack already vendored by `crypto::digest`/`crypto::signature`;
/// sessions that need a hardware-backed or FIPS-validated provider can
/// substitute their own `Arc<dyn CryptoProvider>`.
#[derive(Clone)]
pub struct CryptoBackend {
    provider: Arc<dyn CryptoProvider>,
}

impl CryptoBackend {
    pub fn new(provider: Arc<dyn CryptoProvider>) -> Self {
        CryptoBackend { provider }
    }

    pub fn digest(&self, data: &[u8], algorithm: DigestAlgorithm) -> Vec<u8> {
        self.provider.digest(data, algorithm)
    }

    /// Build a verifier bound to `spki_der`, or a non-recoverable
    /// `CoreError::CryptoBackend` fault if the backend cannot instantiate
    /// one for this key encoding — per §4.2 step 2, this is a configuration
    /// error, not an evidential INVALID.
    pub fn verifier(&self, spki_der: &[u8]) -> Result<Verifier, CoreError> {
        self.provider
            .verifier(spki_der)
            .map_err(|e| CoreError::CryptoBackend(e.to_string()))
    }
}

impl Default for CryptoBackend {
    fn default() -> Self {
        CryptoBackend::new(Arc::new(DefaultCryptoProvider))
    }
}

impl std::fmt::Debug for CryptoBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CryptoBackend(..)")
    }
}

/// A bound public-key verifier, returned by `CryptoBackend::verifier`.
pub struct Verifier {
    key: PublicKey,
}

impl Verifier {
    pub fn verify(
        &self,
        signed_data: &[u8],
        signature: &[u8],
        algorithm: &SignatureAlgorithm,
    ) -> Result<(), SignatureVerificationError> {
        self.key.verify(signed_data, signature, algorithm)
    }
}

/// The capability a `CryptoBackend` delegates to. Implement this trait to
/// swap in an alternative cryptographic provider without touching any
/// calling code.
pub trait CryptoProvider: Send + Sync {
    fn digest(&self, data: &[u8], algorithm: DigestAlgorithm) -> Vec<u8>;
    fn verifier(&self, spki_der: &[u8]) -> Result<Verifier, SignatureVerificationError>;
}

struct DefaultCryptoProvider;

impl CryptoProvider for DefaultCryptoProvider {
    fn digest(&self, data: &[u8], algorithm: DigestAlgorithm) -> Vec<u8> {
        algorithm.digest(data)
    }

    fn verifier(&self, spki_der: &[u8]) -> Result<Verifier, SignatureVerificationError> {
        Ok(Verifier {
            key: PublicKey::from_spki_der(spki_der)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_digests() {
        let backend = CryptoBackend::default();
        let out = backend.digest(b"hello", DigestAlgorithm::Sha256);
        assert_eq!(out.len(), 32);
    }
}
