//! `CertificateToken` — the capability set the core consumes from an
//! opaque X.509 bearer (§3, §6). The core never constructs certificates
//! from network trust material itself; this module gives it something
//! concrete to work with in tests and for the default DER-backed
//! implementation most callers will actually use.

use crate::error::CertificateError;
use crate::token::{DssId, SigningCandidate};

/// The capability set the core requires from a certificate bearer, kept
/// deliberately small per the "essential capabilities consumed by the
/// core" note in §3. A host application's own certificate type need only
/// implement this trait to participate in the rest of the core.
pub trait CertificateToken: std::fmt::Debug + Send + Sync {
    fn der_encoding(&self) -> &[u8];
    fn public_key_der(&self) -> &[u8];
    fn public_key_algorithm_name(&self) -> &str;
    fn subject_dn(&self) -> &str;
    fn issuer_dn(&self) -> &str;
    fn serial_number(&self) -> &str;
    fn subject_key_identifier(&self) -> Option<&[u8]>;

    fn dss_id(&self) -> DssId {
        DssId::from_der(self.der_encoding())
    }
}

/// Default DER-backed `CertificateToken`, parsed with `x509-parser` the way
/// the teacher crate's `parser::certificate::parse_der_certificate` does.
/// Fields are extracted eagerly at construction time so the token can be
/// stored without borrowing the parser's lifetime.
#[derive(Debug, Clone)]
pub struct X509CertificateToken {
    der: Vec<u8>,
    public_key_der: Vec<u8>,
    public_key_algorithm_name: String,
    subject_dn: String,
    issuer_dn: String,
    serial_number: String,
    subject_key_identifier: Option<Vec<u8>>,
}

impl X509CertificateToken {
    pub fn from_der(der: &[u8]) -> Result<Self, CertificateError> {
        use x509_parser::prelude::*;

        let (_, cert) = X509Certificate::from_der(der)
            .map_err(|e| CertificateError::ParseError(e.to_string()))?;

        let spki = cert.public_key();
        let algorithm_name = spki.algorithm.algorithm.to_id_string();

        let ski = cert
            .tbs_certificate
            .extensions()
            .iter()
            .find(|ext| ext.oid == oid_registry::OID_X509_EXT_SUBJECT_KEY_IDENTIFIER)
            .and_then(|ext| match ext.parsed_extension() {
                ParsedExtension::SubjectKeyIdentifier(ski) => Some(ski.0.to_vec()),
                _ => None,
            });

        Ok(X509CertificateToken {
            der: der.to_vec(),
            public_key_der: spki.raw.to_vec(),
            public_key_algorithm_name: algorithm_name,
            subject_dn: cert.subject().to_string(),
            issuer_dn: cert.issuer().to_string(),
            serial_number: cert.tbs_certificate.raw_serial_as_string(),
            subject_key_identifier: ski,
        })
    }

    pub fn from_pem(pem_str: &str) -> Result<Self, CertificateError> {
        let parsed =
            ::pem::parse(pem_str.as_bytes()).map_err(|e| CertificateError::ParseError(e.to_string()))?;
        if parsed.tag() != "CERTIFICATE" {
            return Err(CertificateError::ParseError(format!(
                "expected CERTIFICATE PEM tag, got {}",
                parsed.tag()
            )));
        }
        Self::from_der(parsed.contents())
    }
}

impl CertificateToken for X509CertificateToken {
    fn der_encoding(&self) -> &[u8] {
        &self.der
    }

    fn public_key_der(&self) -> &[u8] {
        &self.public_key_der
    }

    fn public_key_algorithm_name(&self) -> &str {
        &self.public_key_algorithm_name
    }

    fn subject_dn(&self) -> &str {
        &self.subject_dn
    }

    fn issuer_dn(&self) -> &str {
        &self.issuer_dn
    }

    fn serial_number(&self) -> &str {
        &self.serial_number
    }

    fn subject_key_identifier(&self) -> Option<&[u8]> {
        self.subject_key_identifier.as_deref()
    }
}

/// Any `CertificateToken` is usable as a `Token::check_is_signed_by`
/// candidate: the two traits describe overlapping but distinct
/// capabilities (§3), and `CertificateToken` is a strict superset of what
/// `SigningCandidate` needs.
impl<T: CertificateToken + ?Sized> SigningCandidate for T {
    fn der_encoding(&self) -> &[u8] {
        CertificateToken::der_encoding(self)
    }

    fn public_key_der(&self) -> &[u8] {
        CertificateToken::public_key_der(self)
    }

    fn subject_dn(&self) -> String {
        CertificateToken::subject_dn(self).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pem_rejects_wrong_tag() {
        let pem = "-----BEGIN PUBLIC KEY-----\nAA==\n-----END PUBLIC KEY-----\n";
        let result = X509CertificateToken::from_pem(pem);
        assert!(result.is_err());
    }
}
