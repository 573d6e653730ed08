//! Source collections: certificates / CRLs / OCSP responses extracted from
//! one container, tagged with the kind of container they came from, plus
//! the merged `List*Source` views used by P6 (merged-source completeness).

use std::collections::HashSet;
use std::sync::Arc;

use crate::certificate::token::CertificateToken;
use crate::token::DssId;

/// Tags a source with where its artifacts were extracted from (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    Signature,
    Timestamp,
    OcspResponse,
    Aia,
    TrustedStore,
    Other,
}

/// An artifact of revocation evidence: either a CRL or an OCSP response.
/// The core treats both opaquely — CRL/OCSP parsing itself is out of scope
/// (§1) — and only needs to dedup and merge them by identity.
#[derive(Debug, Clone)]
pub struct RevocationToken {
    pub id: DssId,
    pub der_encoding: Vec<u8>,
}

impl RevocationToken {
    pub fn from_der(der: &[u8]) -> Self {
        RevocationToken {
            id: DssId::from_der(der),
            der_encoding: der.to_vec(),
        }
    }
}

/// A set of certificates of one kind extracted from one container (§3).
#[derive(Debug, Clone, Default)]
pub struct CertificateSource {
    pub source_type: Option<SourceType>,
    certificates: Vec<Arc<dyn CertificateToken>>,
}

impl CertificateSource {
    pub fn new(source_type: SourceType) -> Self {
        CertificateSource {
            source_type: Some(source_type),
            certificates: Vec::new(),
        }
    }

    pub fn add(&mut self, cert: Arc<dyn CertificateToken>) {
        self.certificates.push(cert);
    }

    pub fn certificates(&self) -> &[Arc<dyn CertificateToken>] {
        &self.certificates
    }
}

macro_rules! revocation_source {
    ($name:ident) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub source_type: Option<SourceType>,
            tokens: Vec<RevocationToken>,
        }

        impl $name {
            pub fn new(source_type: SourceType) -> Self {
                $name {
                    source_type: Some(source_type),
                    tokens: Vec::new(),
                }
            }

            pub fn add(&mut self, token: RevocationToken) {
                self.tokens.push(token);
            }

            pub fn tokens(&self) -> &[RevocationToken] {
                &self.tokens
            }
        }
    };
}

revocation_source!(CrlSource);
revocation_source!(OcspSource);

/// Merged, deduplicated view across a signature and every nested timestamp
/// (§3 `ListCertificateSource`). Duplicates collapse by `DssId`.
#[derive(Debug, Clone, Default)]
pub struct ListCertificateSource {
    seen: HashSet<DssId>,
    certificates: Vec<Arc<dyn CertificateToken>>,
}

impl ListCertificateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, source: &CertificateSource) {
        for cert in source.certificates() {
            let id = cert.dss_id();
            if self.seen.insert(id) {
                self.certificates.push(cert.clone());
            }
        }
    }

    pub fn certificates(&self) -> &[Arc<dyn CertificateToken>] {
        &self.certificates
    }

    pub fn contains(&self, id: &DssId) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }
}

macro_rules! list_revocation_source {
    ($name:ident, $source:ident) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            seen: HashSet<DssId>,
            tokens: Vec<RevocationToken>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn merge(&mut self, source: &$source) {
                for token in source.tokens() {
                    if self.seen.insert(token.id.clone()) {
                        self.tokens.push(token.clone());
                    }
                }
            }

            pub fn tokens(&self) -> &[RevocationToken] {
                &self.tokens
            }

            pub fn len(&self) -> usize {
                self.tokens.len()
            }

            pub fn is_empty(&self) -> bool {
                self.tokens.is_empty()
            }
        }
    };
}

list_revocation_source!(ListCrlSource, CrlSource);
list_revocation_source!(ListOcspSource, OcspSource);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::token::X509CertificateToken;

    fn dummy_cert(tag: u8) -> Arc<dyn CertificateToken> {
        // A minimal, syntactically-valid-enough stand-in is unnecessary
        // here: we only exercise dedup logic that depends on DssId, which
        // is a pure function of the bytes, not on X.509 validity.
        struct Dummy {
            der: Vec<u8>,
        }
        impl std::fmt::Debug for Dummy {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct("Dummy").finish()
            }
        }
        impl CertificateToken for Dummy {
            fn der_encoding(&self) -> &[u8] {
                &self.der
            }
            fn public_key_der(&self) -> &[u8] {
                &[]
            }
            fn public_key_algorithm_name(&self) -> &str {
                "test"
            }
            fn subject_dn(&self) -> &str {
                "CN=test"
            }
            fn issuer_dn(&self) -> &str {
                "CN=test"
            }
            fn serial_number(&self) -> &str {
                "1"
            }
            fn subject_key_identifier(&self) -> Option<&[u8]> {
                None
            }
        }
        let _ = X509CertificateToken::from_pem; // keep import path exercised
        Arc::new(Dummy { der: vec![tag] })
    }

    #[test]
    fn merged_source_dedups_by_identity() {
        let mut a = CertificateSource::new(SourceType::Signature);
        a.add(dummy_cert(1));
        a.add(dummy_cert(2));
        let mut b = CertificateSource::new(SourceType::Timestamp);
        b.add(dummy_cert(2));
        b.add(dummy_cert(3));

        let mut merged = ListCertificateSource::new();
        merged.merge(&a);
        merged.merge(&b);

        assert_eq!(merged.len(), 3);
    }
}
