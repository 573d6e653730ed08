//! `TimestampSource` (§4.3): buckets every `TimestampToken` attached to a
//! signature by the role it plays, so callers can ask "what attests to the
//! content?" or "what attests to the signature value?" without re-deriving
//! the classification from `TimestampType` themselves each time.

use crate::timestamp::token::TimestampToken;
use crate::timestamp::types::TimestampType;

/// Classifies every timestamp attached to one signature into the buckets
/// §4.3 defines. A single `TimestampToken` can appear in more than one
/// bucket — every signature timestamp is also in `all`, for instance.
#[derive(Default)]
pub struct TimestampSource {
    content: Vec<TimestampToken>,
    signature: Vec<TimestampToken>,
    sig_and_refs: Vec<TimestampToken>,
    refs_only: Vec<TimestampToken>,
    archive: Vec<TimestampToken>,
    document: Vec<TimestampToken>,
}

impl TimestampSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify and add one timestamp to its bucket(s), per `TimestampType`
    /// (§4.3):
    /// - `ContentTimestamp` / `AllDataObjectsTimestamp` /
    ///   `IndividualDataObjectsTimestamp` → content
    /// - `SignatureTimestamp` → signature
    /// - `ValidationDataTimestamp` → sig_and_refs (it covers the signature
    ///   value and the validation data references together)
    /// - `ValidationDataRefsOnlyTimestamp` → refs_only
    /// - `ArchiveTimestamp` → archive
    /// - `DocumentTimestamp` → document
    pub fn add(&mut self, token: TimestampToken) {
        match token.timestamp_type() {
            TimestampType::ContentTimestamp
            | TimestampType::AllDataObjectsTimestamp
            | TimestampType::IndividualDataObjectsTimestamp => self.content.push(token),
            TimestampType::SignatureTimestamp => self.signature.push(token),
            TimestampType::ValidationDataTimestamp => self.sig_and_refs.push(token),
            TimestampType::ValidationDataRefsOnlyTimestamp => self.refs_only.push(token),
            TimestampType::ArchiveTimestamp => self.archive.push(token),
            TimestampType::DocumentTimestamp => self.document.push(token),
        }
    }

    /// Attach a timestamp obtained from outside the signature container
    /// itself (e.g. a detached PAdES DocTimeStamp revision, or a timestamp
    /// supplied by validation policy) — same classification rule as `add`.
    pub fn add_external_timestamp(&mut self, token: TimestampToken) {
        self.add(token);
    }

    pub fn content(&self) -> &[TimestampToken] {
        &self.content
    }

    pub fn signature_timestamps(&self) -> &[TimestampToken] {
        &self.signature
    }

    pub fn sig_and_refs(&self) -> &[TimestampToken] {
        &self.sig_and_refs
    }

    pub fn refs_only(&self) -> &[TimestampToken] {
        &self.refs_only
    }

    pub fn archive(&self) -> &[TimestampToken] {
        &self.archive
    }

    pub fn document(&self) -> &[TimestampToken] {
        &self.document
    }

    /// Every timestamp in every bucket, content-timestamps first and in the
    /// order §4.3 lists them — the "all" view used for exhaustive
    /// processing (merged certificate/revocation sources, for instance).
    pub fn all(&self) -> impl Iterator<Item = &TimestampToken> {
        self.content
            .iter()
            .chain(self.signature.iter())
            .chain(self.sig_and_refs.iter())
            .chain(self.refs_only.iter())
            .chain(self.archive.iter())
            .chain(self.document.iter())
    }

    pub fn len(&self) -> usize {
        self.content.len()
            + self.signature.len()
            + self.sig_and_refs.len()
            + self.refs_only.len()
            + self.archive.len()
            + self.document.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::backend::CryptoBackend;
    use crate::timestamp::types::TimestampLocation;

    fn dummy_token(der: &[u8]) -> Option<TimestampToken> {
        TimestampToken::from_cms_bytes(
            der,
            TimestampType::ContentTimestamp,
            TimestampLocation::CAdES,
            Vec::new(),
            CryptoBackend::default(),
        )
        .ok()
    }

    #[test]
    fn empty_source_has_no_tokens() {
        let source = TimestampSource::new();
        assert!(source.is_empty());
        assert_eq!(source.all().count(), 0);
    }

    #[test]
    fn malformed_der_never_produces_a_token() {
        // Sanity check on the construction path this test module leans on:
        // garbage bytes must fail to parse rather than silently becoming an
        // empty token.
        assert!(dummy_token(b"not a real CMS token").is_none());
    }
}
