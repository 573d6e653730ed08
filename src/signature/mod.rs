//! `AdvancedSignature` (§4.4): the single contract a validator uses
//! regardless of the underlying container format.
//!
//! Per the §9 design note ("a tagged variant ... when behaviors can be
//! dispatched by match, or a capability trait when extensibility by third
//! parties matters"), the concrete representation is both: `SignatureForm`
//! is a tagged variant over the three AdES families, and each variant's
//! payload implements the small `FormProfile` capability trait so a
//! third-party format could extend the system without touching this crate.
//! Everything format-agnostic lives once on `GenericAdvancedSignature`.

pub mod candidates;
pub mod counter;
pub mod levels;
pub mod policy;
pub mod scope;
pub mod verification;

pub use candidates::{CandidateOrigin, CandidatesForSigningCertificate, SigningCertificateCandidate};
pub use counter::SignatureRegistry;
pub use levels::{FormProfile, LevelFacts, SignatureLevel};
pub use policy::{NullPolicyProvider, SignaturePolicy, SignaturePolicyProvider};
pub use scope::{NoOpScopeFinder, SignatureScope, SignatureScopeFinder, SignatureScopeKind};
pub use verification::{ReferenceValidation, ReferenceValidationType, SignatureCryptographicVerification};

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::certificate::source::{CertificateSource, CrlSource, ListCertificateSource, ListCrlSource, ListOcspSource, OcspSource, SourceType};
use crate::certificate::token::CertificateToken;
use crate::crypto::backend::CryptoBackend;
use crate::crypto::digest::DigestAlgorithm;
use crate::crypto::signature::SignatureAlgorithm;
use crate::timestamp::{TimestampSource, TimestampToken};
use crate::token::DssId;
use crate::validation_context::{ValidationContext, ValidationContextToken};

/// XAdES-specific metadata (§3: `canonicalization_method`, `da_identifier`,
/// `includes`).
#[derive(Debug, Clone, Default)]
pub struct XadesDetails {
    pub canonicalization_method: Option<String>,
    pub da_identifier: Option<String>,
    pub includes: Vec<String>,
}

impl FormProfile for XadesDetails {
    fn form_prefix(&self) -> &'static str {
        "XAdES"
    }

    fn validate_structure(&self) -> Result<(), String> {
        Ok(())
    }
}

/// CAdES-specific metadata (§3: `message_digest_value`).
#[derive(Debug, Clone, Default)]
pub struct CadesDetails {
    pub message_digest_value: Option<Vec<u8>>,
}

impl FormProfile for CadesDetails {
    fn form_prefix(&self) -> &'static str {
        "CAdES"
    }

    fn validate_structure(&self) -> Result<(), String> {
        Ok(())
    }
}

/// PAdES-specific metadata (§3: `pdf_revision`).
#[derive(Debug, Clone, Default)]
pub struct PadesDetails {
    pub pdf_revision: Option<u32>,
}

impl FormProfile for PadesDetails {
    fn form_prefix(&self) -> &'static str {
        "PAdES"
    }

    fn validate_structure(&self) -> Result<(), String> {
        if self.pdf_revision.is_none() {
            return Err("PAdES signature has no associated PDF revision".to_string());
        }
        Ok(())
    }
}

/// Tagged signature-form variant (§9 design resolution).
#[derive(Debug, Clone)]
pub enum SignatureForm {
    XAdES(XadesDetails),
    CAdES(CadesDetails),
    PAdES(PadesDetails),
}

impl SignatureForm {
    pub fn profile(&self) -> &dyn FormProfile {
        match self {
            SignatureForm::XAdES(d) => d,
            SignatureForm::CAdES(d) => d,
            SignatureForm::PAdES(d) => d,
        }
    }

    pub fn name(&self) -> &'static str {
        self.profile().form_prefix()
    }
}

/// The single contract a validator uses regardless of signature form
/// (§4.4). Implemented once, for `GenericAdvancedSignature`; format
/// dispatch happens internally through `SignatureForm`/`FormProfile`.
pub trait AdvancedSignature {
    fn id(&self) -> &str;
    fn dss_id(&self) -> &DssId;
    fn signature_form(&self) -> &SignatureForm;
    fn signing_time(&self) -> Option<DateTime<Utc>>;
    fn signature_algorithm(&self) -> Option<&SignatureAlgorithm>;

    fn certificate_source(&self) -> &CertificateSource;
    fn crl_source(&self) -> &CrlSource;
    fn ocsp_source(&self) -> &OcspSource;
    fn complete_certificate_source(&self) -> ListCertificateSource;
    fn complete_crl_source(&self) -> ListCrlSource;
    fn complete_ocsp_source(&self) -> ListOcspSource;

    fn candidates_for_signing_certificate(&self) -> &CandidatesForSigningCertificate;
    fn signing_certificate_token(&self) -> Option<Arc<dyn CertificateToken>>;
    fn set_provided_signing_certificate_token(&mut self, cert: Arc<dyn CertificateToken>);
    fn check_signature_integrity(&mut self) -> &SignatureCryptographicVerification;
    fn check_signing_certificate(&mut self) -> bool;
    fn reference_validations(&self) -> &[ReferenceValidation];

    fn content_timestamps(&self) -> &[TimestampToken];
    fn signature_timestamps(&self) -> &[TimestampToken];
    fn sig_and_refs_timestamps(&self) -> &[TimestampToken];
    fn refs_only_timestamps(&self) -> &[TimestampToken];
    fn archive_timestamps(&self) -> &[TimestampToken];
    fn document_timestamps(&self) -> &[TimestampToken];
    fn all_timestamps(&self) -> Vec<&TimestampToken>;

    fn find_signature_scope(&mut self, finder: &dyn SignatureScopeFinder) -> &[SignatureScope];
    fn validate_structure(&mut self) -> &Result<(), String>;
    fn check_signature_policy(&mut self, provider: &dyn SignaturePolicyProvider) -> Option<&SignaturePolicy>;

    fn signature_levels(&self) -> Vec<SignatureLevel>;
    fn is_data_for_signature_level_present(&self, level: SignatureLevel) -> bool;
    fn data_found_up_to_level(&self) -> Option<SignatureLevel>;

    fn prepare_timestamps(&self, ctx: &mut dyn ValidationContext);

    fn is_doc_hash_only_validation(&self) -> bool;
    fn is_hash_only_validation(&self) -> bool;
}

/// Format-agnostic signature representation (§3 `AdvancedSignature`
/// attributes) plus the `SignatureForm` payload for genuinely
/// format-specific fields.
#[derive(Debug)]
pub struct GenericAdvancedSignature {
    pub id: String,
    dss_id: DssId,
    form: SignatureForm,

    signing_time: Option<DateTime<Utc>>,
    signature_algorithm: Option<SignatureAlgorithm>,
    mask_generation_function: Option<String>,
    claimed_signer_roles: Vec<String>,
    certified_signer_roles: Vec<String>,
    commitment_type_indications: Vec<String>,
    production_place: Option<String>,
    policy_id: Option<String>,
    content_type: Option<String>,
    mime_type: Option<String>,
    content_identifier: Option<String>,
    content_hints: Option<String>,

    detached_contents: Vec<Vec<u8>>,
    container_contents: Option<Vec<u8>>,
    manifest_files: Vec<String>,
    manifested_documents: Vec<String>,
    signature_value: Vec<u8>,
    /// The exact bytes the raw signature covers (signedAttrs DER for CAdES,
    /// canonicalized SignedInfo for XAdES, the ByteRange-excluded span for
    /// PAdES). An external container parser assembles this; when absent,
    /// `check_signature_integrity` falls back to treating the sole detached
    /// content blob as the signed bytes (the common enveloping case).
    dtbsf: Option<Vec<u8>>,

    certificate_source: CertificateSource,
    crl_source: CrlSource,
    ocsp_source: OcspSource,

    timestamps: TimestampSource,

    provided_signing_certificate: Option<Arc<dyn CertificateToken>>,
    candidates: CandidatesForSigningCertificate,
    signing_certificate_token: Option<Arc<dyn CertificateToken>>,

    integrity_result: Option<SignatureCryptographicVerification>,
    reference_validations: Vec<ReferenceValidation>,

    structure_validation_result: Option<Result<(), String>>,
    signature_scopes: Vec<SignatureScope>,
    resolved_policy: Option<SignaturePolicy>,

    pub(crate) master_signature_id: Option<String>,

    doc_hash_only: bool,
    hash_only: bool,

    crypto: CryptoBackend,
}

impl GenericAdvancedSignature {
    pub fn new(id: String, form: SignatureForm) -> Self {
        GenericAdvancedSignature::with_crypto_backend(id, form, CryptoBackend::default())
    }

    pub fn with_crypto_backend(id: String, form: SignatureForm, crypto: CryptoBackend) -> Self {
        GenericAdvancedSignature {
            dss_id: DssId(format!("generic:{id}")),
            id,
            form,
            signing_time: None,
            signature_algorithm: None,
            mask_generation_function: None,
            claimed_signer_roles: Vec::new(),
            certified_signer_roles: Vec::new(),
            commitment_type_indications: Vec::new(),
            production_place: None,
            policy_id: None,
            content_type: None,
            mime_type: None,
            content_identifier: None,
            content_hints: None,
            detached_contents: Vec::new(),
            container_contents: None,
            manifest_files: Vec::new(),
            manifested_documents: Vec::new(),
            signature_value: Vec::new(),
            dtbsf: None,
            certificate_source: CertificateSource::new(SourceType::Signature),
            crl_source: CrlSource::new(SourceType::Signature),
            ocsp_source: OcspSource::new(SourceType::Signature),
            timestamps: TimestampSource::new(),
            provided_signing_certificate: None,
            candidates: CandidatesForSigningCertificate::new(),
            signing_certificate_token: None,
            integrity_result: None,
            reference_validations: Vec::new(),
            structure_validation_result: None,
            signature_scopes: Vec::new(),
            resolved_policy: None,
            master_signature_id: None,
            doc_hash_only: false,
            hash_only: false,
            crypto,
        }
    }

    /// Override the derived `dss_id` with one computed from the signature's
    /// actual DER encoding, the way a real container parser would (this
    /// constructor has no bytes to hash from, since byte-level parsing is
    /// out of scope — see §1).
    pub fn set_dss_id_from_der(&mut self, der: &[u8]) {
        self.dss_id = DssId::from_der(der);
    }

    pub fn set_signing_time(&mut self, time: DateTime<Utc>) {
        self.signing_time = Some(time);
    }

    pub fn set_signature_algorithm(&mut self, algorithm: SignatureAlgorithm) {
        self.signature_algorithm = Some(algorithm);
    }

    pub fn set_mask_generation_function(&mut self, mgf: String) {
        self.mask_generation_function = Some(mgf);
    }
    pub fn mask_generation_function(&self) -> Option<&str> {
        self.mask_generation_function.as_deref()
    }

    pub fn add_claimed_signer_role(&mut self, role: String) {
        self.claimed_signer_roles.push(role);
    }
    pub fn claimed_signer_roles(&self) -> &[String] {
        &self.claimed_signer_roles
    }

    pub fn add_certified_signer_role(&mut self, role: String) {
        self.certified_signer_roles.push(role);
    }
    pub fn certified_signer_roles(&self) -> &[String] {
        &self.certified_signer_roles
    }

    pub fn add_commitment_type_indication(&mut self, indication: String) {
        self.commitment_type_indications.push(indication);
    }
    pub fn commitment_type_indications(&self) -> &[String] {
        &self.commitment_type_indications
    }

    pub fn set_production_place(&mut self, place: String) {
        self.production_place = Some(place);
    }
    pub fn production_place(&self) -> Option<&str> {
        self.production_place.as_deref()
    }

    pub fn set_policy_id(&mut self, id: String) {
        self.policy_id = Some(id);
    }
    pub fn policy_id(&self) -> Option<&str> {
        self.policy_id.as_deref()
    }

    pub fn set_content_metadata(
        &mut self,
        content_type: Option<String>,
        mime_type: Option<String>,
        content_identifier: Option<String>,
        content_hints: Option<String>,
    ) {
        self.content_type = content_type;
        self.mime_type = mime_type;
        self.content_identifier = content_identifier;
        self.content_hints = content_hints;
    }
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }
    pub fn content_identifier(&self) -> Option<&str> {
        self.content_identifier.as_deref()
    }
    pub fn content_hints(&self) -> Option<&str> {
        self.content_hints.as_deref()
    }

    pub fn set_detached_contents(&mut self, contents: Vec<Vec<u8>>) {
        self.detached_contents = contents;
    }
    pub fn detached_contents(&self) -> &[Vec<u8>] {
        &self.detached_contents
    }

    pub fn set_container_contents(&mut self, contents: Vec<u8>) {
        self.container_contents = Some(contents);
    }
    pub fn container_contents(&self) -> Option<&[u8]> {
        self.container_contents.as_deref()
    }

    pub fn set_manifest_files(&mut self, files: Vec<String>) {
        self.manifest_files = files;
    }
    pub fn manifest_files(&self) -> &[String] {
        &self.manifest_files
    }

    /// ASiC-E resolves manifest entries to the actual documents they cover.
    /// Manifest parsing itself is an external collaborator; this setter
    /// just records the resolution the parser already performed.
    pub fn set_manifested_documents(&mut self, documents: Vec<String>) {
        self.manifested_documents = documents;
    }
    pub fn manifested_documents(&self) -> &[String] {
        &self.manifested_documents
    }

    pub fn set_signature_value(&mut self, value: Vec<u8>) {
        self.signature_value = value;
    }
    pub fn signature_value(&self) -> &[u8] {
        &self.signature_value
    }

    pub fn set_dtbsf(&mut self, bytes: Vec<u8>) {
        self.dtbsf = Some(bytes);
    }

    pub fn message_digest_value(&self) -> Option<&[u8]> {
        match &self.form {
            SignatureForm::CAdES(details) => details.message_digest_value.as_deref(),
            _ => None,
        }
    }

    pub fn pdf_revision(&self) -> Option<u32> {
        match &self.form {
            SignatureForm::PAdES(details) => details.pdf_revision,
            _ => None,
        }
    }

    pub fn canonicalization_method(&self) -> Option<&str> {
        match &self.form {
            SignatureForm::XAdES(details) => details.canonicalization_method.as_deref(),
            _ => None,
        }
    }

    pub fn da_identifier(&self) -> Option<&str> {
        match &self.form {
            SignatureForm::XAdES(details) => details.da_identifier.as_deref(),
            _ => None,
        }
    }

    pub fn set_certificate_source(&mut self, source: CertificateSource) {
        self.certificate_source = source;
    }
    pub fn set_crl_source(&mut self, source: CrlSource) {
        self.crl_source = source;
    }
    pub fn set_ocsp_source(&mut self, source: OcspSource) {
        self.ocsp_source = source;
    }

    pub fn add_timestamp(&mut self, token: TimestampToken) {
        self.timestamps.add(token);
    }
    pub fn timestamps(&self) -> &TimestampSource {
        &self.timestamps
    }

    pub fn add_candidate(&mut self, candidate: SigningCertificateCandidate) {
        self.candidates.add(candidate);
    }

    pub fn set_reference_validations(&mut self, references: Vec<ReferenceValidation>) {
        self.reference_validations = references;
    }

    pub fn set_doc_hash_only(&mut self, value: bool) {
        self.doc_hash_only = value;
    }
    pub fn set_hash_only(&mut self, value: bool) {
        self.hash_only = value;
    }

    fn resolve_candidate_certificate(&self) -> Option<Arc<dyn CertificateToken>> {
        if let Some(cert) = &self.provided_signing_certificate {
            return Some(cert.clone());
        }
        self.candidates.all().iter().find_map(|c| c.certificate.clone())
    }

    fn candidate_index_for(&self, cert: &Arc<dyn CertificateToken>) -> Option<usize> {
        let id = cert.dss_id();
        self.candidates
            .all()
            .iter()
            .position(|c| c.certificate.as_ref().map(|cc| cc.dss_id()) == Some(id.clone()))
    }

    fn dtbsf_bytes(&self) -> Option<Vec<u8>> {
        self.dtbsf.clone().or_else(|| self.detached_contents.first().cloned())
    }

    /// Recomputes the reference digests this signature's form actually
    /// models. CAdES has a single message-imprint reference recomputed
    /// against the sole detached content blob; XAdES/PAdES per-reference
    /// validation is supplied by the external container parser via
    /// `set_reference_validations` and re-checked here against positional
    /// detached content where available.
    fn verify_references(&mut self) -> bool {
        let crypto = self.crypto.clone();
        let digest_algorithm = self
            .signature_algorithm
            .as_ref()
            .map(|a| a.digest)
            .unwrap_or(DigestAlgorithm::Sha256);

        if let SignatureForm::CAdES(details) = &self.form {
            if let Some(expected) = details.message_digest_value.clone() {
                let (found, intact) = match self.detached_contents.first() {
                    Some(bytes) => {
                        let computed = crypto.digest(bytes, digest_algorithm);
                        (true, computed == expected)
                    }
                    None => (false, false),
                };
                self.reference_validations = vec![ReferenceValidation {
                    reference_type: ReferenceValidationType::CadesMessageImprint,
                    name: None,
                    digest_algorithm,
                    digest_value: expected,
                    found,
                    intact,
                }];
                return found && intact;
            }
        }

        if self.reference_validations.is_empty() {
            return true;
        }
        let mut all_intact = true;
        for (i, reference) in self.reference_validations.iter_mut().enumerate() {
            if let Some(bytes) = self.detached_contents.get(i) {
                let computed = crypto.digest(bytes, reference.digest_algorithm);
                reference.found = true;
                reference.intact = computed == reference.digest_value;
            }
            all_intact = all_intact && reference.intact;
        }
        all_intact
    }

    fn compute_integrity(&mut self) -> SignatureCryptographicVerification {
        let cert = match self.resolve_candidate_certificate() {
            Some(c) => c,
            None => return SignatureCryptographicVerification::failure("no signing certificate candidate available"),
        };
        let dtbsf = match self.dtbsf_bytes() {
            Some(bytes) => bytes,
            None => {
                return SignatureCryptographicVerification::failure(
                    "no data-to-be-signed bytes available (detached content not set)",
                )
            }
        };
        let algorithm = match self.signature_algorithm.clone() {
            Some(a) => a,
            None => return SignatureCryptographicVerification::failure("signature algorithm not set"),
        };

        let verifier = match self.crypto.verifier(cert.public_key_der()) {
            Ok(v) => v,
            Err(e) => return SignatureCryptographicVerification::failure(format!("crypto backend fault: {e}")),
        };

        let signature_intact = verifier.verify(&dtbsf, &self.signature_value, &algorithm).is_ok();
        let references_valid = self.verify_references();

        if signature_intact {
            if let Some(index) = self.candidate_index_for(&cert) {
                self.candidates.set_valid(index, true);
                self.candidates.elect(index);
            }
            self.signing_certificate_token = Some(cert.clone());
        }

        if signature_intact {
            SignatureCryptographicVerification::success(cert.dss_id(), references_valid)
        } else {
            SignatureCryptographicVerification::failure("signature verification failed")
        }
    }

    fn level_facts(&self) -> LevelFacts {
        LevelFacts::from_timestamps(&self.timestamps, self.signing_time.is_some())
    }
}

impl AdvancedSignature for GenericAdvancedSignature {
    fn id(&self) -> &str {
        &self.id
    }

    fn dss_id(&self) -> &DssId {
        &self.dss_id
    }

    fn signature_form(&self) -> &SignatureForm {
        &self.form
    }

    fn signing_time(&self) -> Option<DateTime<Utc>> {
        self.signing_time
    }

    fn signature_algorithm(&self) -> Option<&SignatureAlgorithm> {
        self.signature_algorithm.as_ref()
    }

    fn certificate_source(&self) -> &CertificateSource {
        &self.certificate_source
    }

    fn crl_source(&self) -> &CrlSource {
        &self.crl_source
    }

    fn ocsp_source(&self) -> &OcspSource {
        &self.ocsp_source
    }

    fn complete_certificate_source(&self) -> ListCertificateSource {
        let mut merged = ListCertificateSource::new();
        merged.merge(&self.certificate_source);
        for ts in self.timestamps.all() {
            merged.merge(ts.certificate_source());
        }
        merged
    }

    fn complete_crl_source(&self) -> ListCrlSource {
        let mut merged = ListCrlSource::new();
        merged.merge(&self.crl_source);
        for ts in self.timestamps.all() {
            merged.merge(ts.crl_source());
        }
        merged
    }

    fn complete_ocsp_source(&self) -> ListOcspSource {
        let mut merged = ListOcspSource::new();
        merged.merge(&self.ocsp_source);
        for ts in self.timestamps.all() {
            merged.merge(ts.ocsp_source());
        }
        merged
    }

    fn candidates_for_signing_certificate(&self) -> &CandidatesForSigningCertificate {
        &self.candidates
    }

    fn signing_certificate_token(&self) -> Option<Arc<dyn CertificateToken>> {
        self.signing_certificate_token.clone()
    }

    fn set_provided_signing_certificate_token(&mut self, cert: Arc<dyn CertificateToken>) {
        self.provided_signing_certificate = Some(cert.clone());
        self.candidates
            .add(SigningCertificateCandidate::new(CandidateOrigin::CallerSupplied, Some(cert)));
    }

    fn check_signature_integrity(&mut self) -> &SignatureCryptographicVerification {
        let result = self.compute_integrity();
        self.integrity_result = Some(result);
        self.integrity_result.as_ref().unwrap()
    }

    fn check_signing_certificate(&mut self) -> bool {
        let referenced = self
            .candidates
            .all()
            .iter()
            .find(|c| matches!(c.origin, CandidateOrigin::SignedPropertyReference | CandidateOrigin::EssCertIdV2))
            .and_then(|c| c.certificate.clone());
        let bag_cert = self
            .candidates
            .all()
            .iter()
            .find(|c| matches!(c.origin, CandidateOrigin::UnsignedHeader))
            .and_then(|c| c.certificate.clone());

        match (referenced, bag_cert) {
            (Some(r), Some(b)) if r.dss_id() != b.dss_id() => {
                self.candidates.clear_election();
                false
            }
            _ => true,
        }
    }

    fn reference_validations(&self) -> &[ReferenceValidation] {
        &self.reference_validations
    }

    fn content_timestamps(&self) -> &[TimestampToken] {
        self.timestamps.content()
    }

    fn signature_timestamps(&self) -> &[TimestampToken] {
        self.timestamps.signature_timestamps()
    }

    fn sig_and_refs_timestamps(&self) -> &[TimestampToken] {
        self.timestamps.sig_and_refs()
    }

    fn refs_only_timestamps(&self) -> &[TimestampToken] {
        self.timestamps.refs_only()
    }

    fn archive_timestamps(&self) -> &[TimestampToken] {
        self.timestamps.archive()
    }

    fn document_timestamps(&self) -> &[TimestampToken] {
        self.timestamps.document()
    }

    fn all_timestamps(&self) -> Vec<&TimestampToken> {
        self.timestamps.all().collect()
    }

    fn find_signature_scope(&mut self, finder: &dyn SignatureScopeFinder) -> &[SignatureScope] {
        self.signature_scopes = finder.find(self);
        &self.signature_scopes
    }

    fn validate_structure(&mut self) -> &Result<(), String> {
        let result = self.form.profile().validate_structure();
        self.structure_validation_result = Some(result);
        self.structure_validation_result.as_ref().unwrap()
    }

    fn check_signature_policy(&mut self, provider: &dyn SignaturePolicyProvider) -> Option<&SignaturePolicy> {
        // `resolve` is re-run each call rather than cached: policy stores
        // are external and may be updated between calls, unlike the
        // evidential outcomes this crate owns.
        match &self.policy_id {
            Some(id) => {
                self.resolved_policy = provider.resolve(id);
                self.resolved_policy.as_ref()
            }
            None => None,
        }
    }

    fn signature_levels(&self) -> Vec<SignatureLevel> {
        self.form.profile().signature_levels()
    }

    fn is_data_for_signature_level_present(&self, level: SignatureLevel) -> bool {
        self.form.profile().is_data_for_signature_level_present(level, &self.level_facts())
    }

    fn data_found_up_to_level(&self) -> Option<SignatureLevel> {
        self.form.profile().data_found_up_to_level(&self.level_facts())
    }

    fn prepare_timestamps(&self, ctx: &mut dyn ValidationContext) {
        for ts in self.timestamps.all() {
            ctx.add_token(ValidationContextToken::Timestamp(ts));
            for cert in ts.certificate_source().certificates() {
                ctx.add_token(ValidationContextToken::Certificate(cert.as_ref()));
            }
            for revocation in ts.crl_source().tokens() {
                ctx.add_token(ValidationContextToken::Revocation(revocation));
            }
            for revocation in ts.ocsp_source().tokens() {
                ctx.add_token(ValidationContextToken::Revocation(revocation));
            }
        }
    }

    fn is_doc_hash_only_validation(&self) -> bool {
        self.doc_hash_only
    }

    fn is_hash_only_validation(&self) -> bool {
        self.hash_only
    }
}
