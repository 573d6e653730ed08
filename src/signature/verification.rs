//! `SignatureCryptographicVerification` and `ReferenceValidation` (§4.5):
//! the evidence records `check_signature_integrity` produces.

use crate::crypto::digest::DigestAlgorithm;
use crate::token::DssId;

/// Result of `AdvancedSignature::check_signature_integrity()`.
#[derive(Debug, Clone)]
pub struct SignatureCryptographicVerification {
    pub signature_intact: bool,
    pub references_valid: bool,
    pub error_message: Option<String>,
    pub used_signing_certificate: Option<DssId>,
}

impl SignatureCryptographicVerification {
    pub fn failure(error_message: impl Into<String>) -> Self {
        SignatureCryptographicVerification {
            signature_intact: false,
            references_valid: false,
            error_message: Some(error_message.into()),
            used_signing_certificate: None,
        }
    }

    pub fn success(used_signing_certificate: DssId, references_valid: bool) -> Self {
        SignatureCryptographicVerification {
            signature_intact: true,
            references_valid,
            error_message: None,
            used_signing_certificate: Some(used_signing_certificate),
        }
    }
}

/// What kind of signed reference a `ReferenceValidation` describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceValidationType {
    /// One `ds:Reference` in an XAdES signature.
    XadesReference,
    /// The single CAdES message-imprint (the signed content's digest).
    CadesMessageImprint,
}

/// Per-reference integrity result (one per signed reference in XAdES, a
/// single entry for CAdES's message-imprint).
#[derive(Debug, Clone)]
pub struct ReferenceValidation {
    pub reference_type: ReferenceValidationType,
    pub name: Option<String>,
    pub digest_algorithm: DigestAlgorithm,
    pub digest_value: Vec<u8>,
    pub found: bool,
    pub intact: bool,
}
