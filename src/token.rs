//! Base `Token` abstraction shared by every cryptographic token kind
//! (currently just `TimestampToken`, but the trait is the seam a future
//! `RevocationToken` would also implement).

use crate::crypto::signature::SignatureAlgorithm;
use crate::error::CoreError;

/// A stable identifier derived from a token's DER encoding. Two tokens
/// constructed from byte-identical DER share the same `DssId` (P1).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DssId(pub String);

impl DssId {
    /// Derive a `DssId` from a DER encoding. Grounded on the same
    /// hash-the-bytes approach the teacher crate uses for certificate/
    /// chain hashing (`crypto::hash::sha256` in `verifier::certificate`),
    /// generalized to hex-encode so the id is human-printable in logs.
    pub fn from_der(der: &[u8]) -> Self {
        use sha2::{Digest, Sha256};
        let digest = Sha256::digest(der);
        DssId(hex::encode(digest))
    }
}

/// Outcome of `Token::check_is_signed_by`. `None` on the owning struct means
/// "not yet checked"; this type is the `Some` payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidityOutcome {
    Valid {
        signer_dn: String,
        algorithm: SignatureAlgorithm,
    },
    Invalid {
        reason: String,
    },
}

impl ValidityOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidityOutcome::Valid { .. })
    }
}

/// A candidate signer: the certificate a subclass hook should try to verify
/// the token's embedded signature against.
pub trait SigningCandidate {
    fn der_encoding(&self) -> &[u8];
    fn public_key_der(&self) -> &[u8];
    fn subject_dn(&self) -> String;
}

/// Shared identity and signer-verification protocol (§4.1).
///
/// `check_is_signed_by` and `build_token_identifier` are the two subclass
/// hooks from the specification; idempotence (P4) is enforced by each
/// implementor caching its result the first time `check_is_signed_by`
/// reaches a terminal `VALID` outcome and never overwriting it afterward.
pub trait Token {
    /// Stable identifier derived from this token's DER encoding.
    fn dss_id(&self) -> &DssId;

    /// Result of the most recent `check_is_signed_by` call, or `None` if it
    /// has never been called.
    fn signature_validity(&self) -> Option<&ValidityOutcome>;

    /// Verify that this token was signed by `candidate`. Idempotent: once a
    /// VALID outcome has been recorded, repeated calls return it unchanged
    /// rather than re-running cryptography (P4).
    ///
    /// `Ok` always carries an evidential outcome (VALID or INVALID with a
    /// reason) — an algorithmic "the signature didn't check out" is never
    /// an `Err`. `Err` is reserved for the one case §4.1/§4.2 calls out as
    /// a non-recoverable fault: the crypto backend could not even
    /// instantiate a verifier for the candidate's key (a configuration
    /// error, not evidence about the token).
    fn check_is_signed_by(
        &mut self,
        candidate: &dyn SigningCandidate,
    ) -> Result<&ValidityOutcome, CoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_der_produces_identical_dss_id() {
        let der = b"some certificate bytes";
        assert_eq!(DssId::from_der(der), DssId::from_der(der));
    }

    #[test]
    fn different_der_produces_different_dss_id() {
        assert_ne!(DssId::from_der(b"a"), DssId::from_der(b"b"));
    }
}
