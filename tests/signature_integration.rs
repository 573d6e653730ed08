//! Black-box scenarios from the evidential core's testable-properties list,
//! driven only through the public crate API (no access to private fields).

use std::sync::Arc;

use ades_core::certificate::token::CertificateToken;
use ades_core::crypto::digest::DigestAlgorithm;
use ades_core::crypto::signature::SignatureAlgorithm;
use ades_core::signature::{
    AdvancedSignature, CadesDetails, CandidateOrigin, GenericAdvancedSignature, SignatureForm,
    SignatureRegistry, SigningCertificateCandidate,
};
use ades_core::token::DssId;

#[derive(Debug)]
struct FixtureCertificate {
    der: Vec<u8>,
}

impl CertificateToken for FixtureCertificate {
    fn der_encoding(&self) -> &[u8] {
        &self.der
    }
    fn public_key_der(&self) -> &[u8] {
        &self.der
    }
    fn public_key_algorithm_name(&self) -> &str {
        "rsaEncryption"
    }
    fn subject_dn(&self) -> &str {
        "CN=Fixture Signer"
    }
    fn issuer_dn(&self) -> &str {
        "CN=Fixture CA"
    }
    fn serial_number(&self) -> &str {
        "1"
    }
    fn subject_key_identifier(&self) -> Option<&[u8]> {
        None
    }
}

fn cades_signature(id: &str) -> GenericAdvancedSignature {
    GenericAdvancedSignature::new(id.to_string(), SignatureForm::CAdES(CadesDetails::default()))
}

/// S5: checking integrity without ever supplying detached content yields a
/// graceful `signature_intact = false` plus a diagnostic message, never a
/// panic or propagated error.
#[test]
fn missing_detached_content_fails_integrity_gracefully() {
    let mut signature = cades_signature("s5");
    signature.set_signature_algorithm(SignatureAlgorithm::rsa(DigestAlgorithm::Sha256));
    signature.set_signature_value(vec![0u8; 256]);
    signature.set_provided_signing_certificate_token(Arc::new(FixtureCertificate { der: vec![1, 2, 3] }));

    let result = signature.check_signature_integrity();

    assert!(!result.signature_intact);
    assert!(result.error_message.is_some());
}

/// S6: KeyInfo (unsigned header) disagrees with the signed property
/// reference on which certificate signed. `check_signing_certificate` must
/// detect the mismatch and clear any election, but the candidate list
/// itself stays intact for inspection.
#[test]
fn substitution_attack_clears_election_but_keeps_candidates() {
    let mut signature = cades_signature("s6");

    let referenced = Arc::new(FixtureCertificate { der: vec![1, 2, 3] });
    let substituted = Arc::new(FixtureCertificate { der: vec![9, 9, 9] });

    signature.add_candidate(SigningCertificateCandidate::new(
        CandidateOrigin::EssCertIdV2,
        Some(referenced.clone()),
    ));
    signature.add_candidate(SigningCertificateCandidate::new(
        CandidateOrigin::UnsignedHeader,
        Some(substituted),
    ));

    let agrees = signature.check_signing_certificate();

    assert!(!agrees);
    assert_eq!(signature.candidates_for_signing_certificate().all().len(), 2);
    assert!(signature.candidates_for_signing_certificate().elected().is_none());
}

/// P6 (degenerate case: no nested timestamps): the merged certificate
/// source always contains everything the signature's own source holds.
/// Cross-timestamp merging of the same dedup logic is covered directly in
/// `certificate::source`'s own unit tests.
#[test]
fn merged_certificate_source_contains_signatures_own_certificates() {
    let mut signature = cades_signature("p6");
    let mut own_source = ades_core::certificate::source::CertificateSource::new(
        ades_core::certificate::source::SourceType::Signature,
    );
    own_source.add(Arc::new(FixtureCertificate { der: vec![7] }));
    signature.set_certificate_source(own_source);

    let merged = signature.complete_certificate_source();

    assert_eq!(merged.len(), 1);
    assert!(merged.contains(&DssId::from_der(&[7])));
}

/// P7: a counter-signature's `master_signature_id` always names the
/// signature that `counter_signatures()` returns it under.
#[test]
fn counter_signature_duality_holds_through_the_registry() {
    let mut registry = SignatureRegistry::new();
    registry.insert(cades_signature("master"));
    registry.insert(cades_signature("counter"));
    registry.set_master_signature("counter", "master").unwrap();

    let counters = registry.counter_signatures("master");
    assert_eq!(counters.len(), 1);
    assert_eq!(counters[0].id, "counter");
}
