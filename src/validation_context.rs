//! `ValidationContext` (§6): the external sink tokens discovered during
//! validation are emitted into, so a caller's certificate-chain builder can
//! process them without this crate knowing anything about chain building.

use crate::certificate::source::RevocationToken;
use crate::certificate::token::CertificateToken;
use crate::timestamp::token::TimestampToken;

/// One token handed to a `ValidationContext` by `prepare_timestamps`.
pub enum ValidationContextToken<'a> {
    Timestamp(&'a TimestampToken),
    Certificate(&'a dyn CertificateToken),
    Revocation(&'a RevocationToken),
}

/// Sink for tokens discovered while preparing a signature for validation
/// (§4.4 `prepare_timestamps`). Side-effect only — no return value, per the
/// spec's "emits ... into the provided validation context" wording.
pub trait ValidationContext {
    fn add_token(&mut self, token: ValidationContextToken<'_>);
}

/// A `ValidationContext` that just counts what it receives, by kind —
/// useful in tests and as a minimal default for callers that don't need
/// the tokens themselves (e.g. a caller driving chain-building some other
/// way).
#[derive(Debug, Default)]
pub struct CountingValidationContext {
    pub timestamps: usize,
    pub certificates: usize,
    pub revocations: usize,
}

impl ValidationContext for CountingValidationContext {
    fn add_token(&mut self, token: ValidationContextToken<'_>) {
        match token {
            ValidationContextToken::Timestamp(_) => self.timestamps += 1,
            ValidationContextToken::Certificate(_) => self.certificates += 1,
            ValidationContextToken::Revocation(_) => self.revocations += 1,
        }
    }
}
