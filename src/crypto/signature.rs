//! Signature algorithms and raw-signature verification.
//!
//! Generalizes the teacher crate's `crypto::signature::PublicKey` (which
//! supported P-256/P-384 ECDSA only, enough for Sigstore/Fulcio leaves) to
//! also cover RSA PKCS#1v1.5 and RSASSA-PSS, since AdES/TSA signers are
//! overwhelmingly RSA in practice (§8 scenarios S1/S2).

use crate::crypto::digest::DigestAlgorithm;
use crate::error::SignatureVerificationError;

/// Encryption (public-key) algorithm family, independent of the digest
/// paired with it.
#[derive(Debug, Clone, PartialEq)]
pub enum EncryptionAlgorithm {
    Rsa,
    RsaSsaPss(PssParameters),
    EcdsaP256,
    EcdsaP384,
}

/// Decoded RSASSA-PSS `AlgorithmIdentifier` parameters (the "OAEP-style
/// parameter block" referenced in specification §6).
#[derive(Debug, Clone, PartialEq)]
pub struct PssParameters {
    pub hash_algorithm: DigestAlgorithm,
    pub salt_length: u32,
}

/// The `(encryption, digest)` pair §4.1/§4.2 record on a successfully
/// verified token, or the OID+params pair for parametric schemes such as
/// RSASSA-PSS.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureAlgorithm {
    pub encryption: EncryptionAlgorithm,
    pub digest: DigestAlgorithm,
}

impl SignatureAlgorithm {
    pub fn rsa(digest: DigestAlgorithm) -> Self {
        SignatureAlgorithm {
            encryption: EncryptionAlgorithm::Rsa,
            digest,
        }
    }

    pub fn rsa_pss(digest: DigestAlgorithm, salt_length: u32) -> Self {
        SignatureAlgorithm {
            encryption: EncryptionAlgorithm::RsaSsaPss(PssParameters {
                hash_algorithm: digest,
                salt_length,
            }),
            digest,
        }
    }

    pub fn ecdsa_p256(digest: DigestAlgorithm) -> Self {
        SignatureAlgorithm {
            encryption: EncryptionAlgorithm::EcdsaP256,
            digest,
        }
    }

    pub fn ecdsa_p384(digest: DigestAlgorithm) -> Self {
        SignatureAlgorithm {
            encryption: EncryptionAlgorithm::EcdsaP384,
            digest,
        }
    }
}

/// A public key extracted from a certificate, able to verify a raw
/// signature over arbitrary signed bytes. This is the concrete
/// implementation of the "Crypto verifier" external interface from §6 for
/// the algorithm families this crate supports out of the box; a
/// `CryptoBackend` (see `crypto::backend`) may supply an alternative.
#[derive(Debug, Clone)]
pub enum PublicKey {
    Rsa(rsa::RsaPublicKey),
    P256(p256::ecdsa::VerifyingKey),
    P384(p384::ecdsa::VerifyingKey),
}

impl PublicKey {
    /// Parse a SubjectPublicKeyInfo DER blob, trying RSA then the EC curves
    /// this crate supports. Mirrors the teacher's
    /// `PublicKey::from_certificate`, generalized to accept a bare SPKI DER
    /// blob (as extracted from any `CertificateToken`) rather than an
    /// `x509_parser::X509Certificate` directly, so it composes with either
    /// certificate representation.
    pub fn from_spki_der(spki_der: &[u8]) -> Result<Self, SignatureVerificationError> {
        use rsa::pkcs8::DecodePublicKey as _;

        if let Ok(key) = rsa::RsaPublicKey::from_public_key_der(spki_der) {
            return Ok(PublicKey::Rsa(key));
        }
        if let Ok(key) = p256::ecdsa::VerifyingKey::from_public_key_der(spki_der) {
            return Ok(PublicKey::P256(key));
        }
        if let Ok(key) = p384::ecdsa::VerifyingKey::from_public_key_der(spki_der) {
            return Ok(PublicKey::P384(key));
        }
        Err(SignatureVerificationError::PublicKeyParse(
            "unsupported or malformed SubjectPublicKeyInfo".to_string(),
        ))
    }

    /// Verify `signature` over `signed_data` using `algorithm`. The
    /// RustCrypto `Verifier` impls used below hash their message argument
    /// internally, so `signed_data` is passed through as-is rather than
    /// pre-hashed here.
    pub fn verify(
        &self,
        signed_data: &[u8],
        signature: &[u8],
        algorithm: &SignatureAlgorithm,
    ) -> Result<(), SignatureVerificationError> {
        match (self, &algorithm.encryption) {
            (PublicKey::Rsa(key), EncryptionAlgorithm::Rsa) => {
                verify_rsa_pkcs1v15(key, signed_data, signature, algorithm.digest)
            }
            (PublicKey::Rsa(key), EncryptionAlgorithm::RsaSsaPss(pss)) => {
                verify_rsa_pss(key, signed_data, signature, pss)
            }
            (PublicKey::P256(key), EncryptionAlgorithm::EcdsaP256) => {
                verify_ecdsa_p256(key, signed_data, signature)
            }
            (PublicKey::P384(key), EncryptionAlgorithm::EcdsaP384) => {
                verify_ecdsa_p384(key, signed_data, signature)
            }
            _ => Err(SignatureVerificationError::UnsupportedAlgorithm(
                "public key family does not match signature algorithm".to_string(),
            )),
        }
    }
}

fn verify_rsa_pkcs1v15(
    key: &rsa::RsaPublicKey,
    message: &[u8],
    signature: &[u8],
    alg: DigestAlgorithm,
) -> Result<(), SignatureVerificationError> {
    use rsa::signature::Verifier as _;
    let sig = rsa::pkcs1v15::Signature::try_from(signature)
        .map_err(|e| SignatureVerificationError::InvalidFormat(e.to_string()))?;
    match alg {
        DigestAlgorithm::Sha256 => {
            rsa::pkcs1v15::VerifyingKey::<sha2::Sha256>::new(key.clone())
                .verify(message, &sig)
                .map_err(|_| SignatureVerificationError::Invalid)
        }
        DigestAlgorithm::Sha384 => {
            rsa::pkcs1v15::VerifyingKey::<sha2::Sha384>::new(key.clone())
                .verify(message, &sig)
                .map_err(|_| SignatureVerificationError::Invalid)
        }
        DigestAlgorithm::Sha512 => {
            rsa::pkcs1v15::VerifyingKey::<sha2::Sha512>::new(key.clone())
                .verify(message, &sig)
                .map_err(|_| SignatureVerificationError::Invalid)
        }
        other => Err(SignatureVerificationError::UnsupportedAlgorithm(format!(
            "RSA PKCS#1v1.5 with digest {:?}",
            other
        ))),
    }
}

fn verify_rsa_pss(
    key: &rsa::RsaPublicKey,
    message: &[u8],
    signature: &[u8],
    pss: &PssParameters,
) -> Result<(), SignatureVerificationError> {
    use rsa::signature::Verifier as _;
    let sig = rsa::pss::Signature::try_from(signature)
        .map_err(|e| SignatureVerificationError::InvalidFormat(e.to_string()))?;
    match pss.hash_algorithm {
        DigestAlgorithm::Sha256 => {
            rsa::pss::VerifyingKey::<sha2::Sha256>::new(key.clone())
                .verify(message, &sig)
                .map_err(|_| SignatureVerificationError::Invalid)
        }
        DigestAlgorithm::Sha384 => {
            rsa::pss::VerifyingKey::<sha2::Sha384>::new(key.clone())
                .verify(message, &sig)
                .map_err(|_| SignatureVerificationError::Invalid)
        }
        DigestAlgorithm::Sha512 => {
            rsa::pss::VerifyingKey::<sha2::Sha512>::new(key.clone())
                .verify(message, &sig)
                .map_err(|_| SignatureVerificationError::Invalid)
        }
        other => Err(SignatureVerificationError::UnsupportedAlgorithm(format!(
            "RSASSA-PSS with digest {:?}",
            other
        ))),
    }
}

fn verify_ecdsa_p256(
    key: &p256::ecdsa::VerifyingKey,
    message: &[u8],
    signature: &[u8],
) -> Result<(), SignatureVerificationError> {
    use ecdsa::signature::Verifier as _;
    let sig = p256::ecdsa::Signature::from_der(signature)
        .map_err(|e| SignatureVerificationError::InvalidFormat(e.to_string()))?;
    key.verify(message, &sig)
        .map_err(|_| SignatureVerificationError::Invalid)
}

fn verify_ecdsa_p384(
    key: &p384::ecdsa::VerifyingKey,
    message: &[u8],
    signature: &[u8],
) -> Result<(), SignatureVerificationError> {
    use ecdsa::signature::Verifier as _;
    let sig = p384::ecdsa::Signature::from_der(signature)
        .map_err(|e| SignatureVerificationError::InvalidFormat(e.to_string()))?;
    key.verify(message, &sig)
        .map_err(|_| SignatureVerificationError::Invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_algorithm_error_displays() {
        let err = SignatureVerificationError::UnsupportedAlgorithm("1.2.3.4".to_string());
        assert!(format!("{}", err).contains("1.2.3.4"));
    }

    #[test]
    fn pss_params_carry_salt_length() {
        let alg = SignatureAlgorithm::rsa_pss(DigestAlgorithm::Sha256, 32);
        match alg.encryption {
            EncryptionAlgorithm::RsaSsaPss(p) => assert_eq!(p.salt_length, 32),
            _ => panic!("expected PSS"),
        }
    }
}
