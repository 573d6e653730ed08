//! Timestamp classification types (§3, §4.3).

use crate::crypto::digest::DigestAlgorithm;

/// What a timestamp attests to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampType {
    ContentTimestamp,
    AllDataObjectsTimestamp,
    IndividualDataObjectsTimestamp,
    SignatureTimestamp,
    ValidationDataRefsOnlyTimestamp,
    ValidationDataTimestamp,
    ArchiveTimestamp,
    DocumentTimestamp,
}

/// Sub-kind recorded only when `TimestampType::ArchiveTimestamp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveTimestampType {
    Xades141,
    Xades,
    CadesV2,
    CadesV3,
    Pades,
}

/// The container family a timestamp was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampLocation {
    CAdES,
    XAdES,
    PAdES,
    Doc,
    ASiC,
}

/// What kind of material a `TimestampedReference` points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceCategory {
    SignedData,
    SignatureValue,
    CertificateRef,
    RevocationRef,
}

/// One entry in a timestamp's ordered `timestamped_references` list (§3).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimestampedReference {
    pub category: ReferenceCategory,
    pub id: String,
}

/// `(digest algorithm, digest value)` extracted from the RFC 3161 info.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageImprint {
    pub algorithm: DigestAlgorithm,
    pub value: Vec<u8>,
}

/// Has `match_data` run yet, and if so did the imprint match? Modeled as a
/// 3-state enum rather than two booleans so that reading the "intact" bit
/// before `match_data` runs is a type-level impossibility enforced at
/// runtime by `TimestampToken` (P2), not a convention callers must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    NotProcessed,
    Processed {
        data_found: bool,
        intact: bool,
    },
}

impl MatchOutcome {
    pub fn is_processed(&self) -> bool {
        !matches!(self, MatchOutcome::NotProcessed)
    }
}
