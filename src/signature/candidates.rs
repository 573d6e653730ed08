//! `CandidatesForSigningCertificate` (§4.6): the ordered, never-empty-after-
//! resolution list of certificates that might be the signing certificate,
//! each tagged with how it was derived and whether it turned out valid.

use std::sync::Arc;

use crate::certificate::token::CertificateToken;

/// Where a candidate certificate reference came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOrigin {
    /// XAdES `ds:KeyInfo` / signed `SigningCertificate(V2)` property.
    SignedPropertyReference,
    /// CAdES `ESSCertIDv2` in the signed attributes.
    EssCertIdV2,
    /// An unsigned header or bag (e.g. CMS `certificates` with no signed
    /// reference corroborating it).
    UnsignedHeader,
    /// Supplied by the caller via `set_provided_signing_certificate_token`.
    CallerSupplied,
}

/// One candidate signing certificate plus its provenance and validity.
#[derive(Debug, Clone)]
pub struct SigningCertificateCandidate {
    pub origin: CandidateOrigin,
    pub certificate: Option<Arc<dyn CertificateToken>>,
    /// Set during `check_signature_integrity` / `check_signing_certificate`.
    pub valid: Option<bool>,
}

impl SigningCertificateCandidate {
    pub fn new(origin: CandidateOrigin, certificate: Option<Arc<dyn CertificateToken>>) -> Self {
        SigningCertificateCandidate {
            origin,
            certificate,
            valid: None,
        }
    }
}

/// The ordered candidate list (§4.6). Exactly zero or one entry is elected;
/// the elected entry becomes `signing_certificate_token`.
#[derive(Debug, Default)]
pub struct CandidatesForSigningCertificate {
    candidates: Vec<SigningCertificateCandidate>,
    elected: Option<usize>,
}

impl CandidatesForSigningCertificate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, candidate: SigningCertificateCandidate) {
        self.candidates.push(candidate);
    }

    pub fn all(&self) -> &[SigningCertificateCandidate] {
        &self.candidates
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Mark the candidate at `index` valid/invalid. Does not itself elect it.
    pub fn set_valid(&mut self, index: usize, valid: bool) {
        if let Some(candidate) = self.candidates.get_mut(index) {
            candidate.valid = Some(valid);
        }
    }

    /// Elect the candidate at `index` as the signing certificate. Clears any
    /// prior election — at most one candidate is ever elected (§4.6).
    pub fn elect(&mut self, index: usize) {
        if index < self.candidates.len() {
            self.elected = Some(index);
        }
    }

    pub fn clear_election(&mut self) {
        self.elected = None;
    }

    pub fn elected(&self) -> Option<&SigningCertificateCandidate> {
        self.elected.and_then(|i| self.candidates.get(i))
    }

    pub fn elected_certificate(&self) -> Option<Arc<dyn CertificateToken>> {
        self.elected().and_then(|c| c.certificate.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_one_candidate_is_elected() {
        let mut candidates = CandidatesForSigningCertificate::new();
        candidates.add(SigningCertificateCandidate::new(
            CandidateOrigin::SignedPropertyReference,
            None,
        ));
        candidates.add(SigningCertificateCandidate::new(CandidateOrigin::UnsignedHeader, None));

        assert!(candidates.elected().is_none());
        candidates.elect(1);
        assert_eq!(candidates.elected().map(|_| 1), Some(1));
        candidates.elect(0);
        assert!(candidates.elected().is_some());
        // Only the most recent election sticks.
        candidates.clear_election();
        assert!(candidates.elected().is_none());
    }

    #[test]
    fn empty_candidate_list_has_no_election() {
        let candidates = CandidatesForSigningCertificate::new();
        assert!(candidates.is_empty());
        assert!(candidates.elected().is_none());
    }
}
