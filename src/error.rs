//! Error taxonomy for the AdES core.
//!
//! Mirrors the routing rules in the specification's error-handling design:
//! parse errors and crypto-backend faults propagate to the caller, signature
//! and message-imprint outcomes are recorded on the evidence object instead
//! of propagating, and contract violations are a distinct, non-maskable
//! fault kind so they can never be confused with an evidential INVALID.

use thiserror::Error;

/// Top-level error type returned by fallible constructors and verification
/// entry points.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("certificate error: {0}")]
    Certificate(#[from] CertificateError),

    #[error("timestamp error: {0}")]
    Timestamp(#[from] TimestampError),

    #[error("signature verification error: {0}")]
    SignatureVerification(#[from] SignatureVerificationError),

    #[error("contract violation: {0}")]
    Contract(#[from] ContractViolation),

    #[error("cryptographic backend fault: {0}")]
    CryptoBackend(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Malformed CMS / TSTInfo / certificate bytes. Terminal for the affected
/// construction — the caller never receives a half-built token.
#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("failed to parse certificate: {0}")]
    ParseError(String),

    #[error("certificate chain verification failed: {0}")]
    ChainVerificationFailed(String),

    #[error("certificate expired or not yet valid")]
    ValidityPeriod,

    #[error(
        "signing time outside certificate validity: signing_time={signing_time}, not_before={not_before}, not_after={not_after}"
    )]
    SigningTimeOutsideValidity {
        signing_time: String,
        not_before: String,
        not_after: String,
    },

    #[error("certificate not found for dss_id {0}")]
    NotFound(String),
}

/// Errors arising while parsing or verifying an RFC 3161 TimeStampToken.
#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("failed to parse RFC 3161 timestamp token: {0}")]
    Rfc3161Parse(String),

    #[error("no SignerInfo in timestamp token matches the candidate certificate")]
    NoMatchingSignerInfo,

    #[error("TSA signature verification failed (strict: {strict_reason}, lenient: {lenient_reason})")]
    SignatureInvalid {
        strict_reason: String,
        lenient_reason: String,
    },

    #[error("message imprint mismatch: expected {expected}, got {actual}")]
    MessageImprintMismatch { expected: String, actual: String },

    #[error("unsupported digest algorithm OID: {0}")]
    UnsupportedDigestAlgorithm(String),

    #[error("invalid TSA certificate: {0}")]
    InvalidTsaCertificate(String),
}

/// Errors arising while verifying a raw cryptographic signature.
#[derive(Debug, Error)]
pub enum SignatureVerificationError {
    #[error("unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("invalid signature encoding: {0}")]
    InvalidFormat(String),

    #[error("signature verification failed")]
    Invalid,

    #[error("failed to parse public key: {0}")]
    PublicKeyParse(String),
}

/// A method was called out of the order the contract requires
/// (e.g. reading `message_imprint_intact` before `match_data` ran).
/// This is a programmer error, never an evidential outcome.
#[derive(Debug, Error)]
pub enum ContractViolation {
    #[error("message imprint accessed before match_data() was called")]
    ImprintReadBeforeMatch,

    #[error("signing certificate accessed before check_signature_integrity() was called")]
    SigningCertificateReadBeforeIntegrityCheck,

    #[error("set_master_signature would create a counter-signature cycle")]
    CounterSignatureCycle,
}
