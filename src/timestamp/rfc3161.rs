//! RFC 3161 TimeStampToken parsing out of a CMS `ContentInfo`/`SignedData`
//! envelope. Directly grounded in (and substantially widened from) the
//! teacher crate's `parser::rfc3161`: that parser recognized only
//! SHA-256/SHA-384 message imprints and never inspected `SignerInfo`
//! beyond existence; this version recognizes the full digest OID table
//! (`crypto::digest::DigestAlgorithm`) and extracts enough of each
//! `SignerInfo` (SID, digest/signature algorithm, signed attributes) for
//! `TimestampToken::check_is_signed_by` to match a candidate certificate
//! and verify its signature (§4.2).

use chrono::{DateTime, TimeZone, Utc};
use cms::cert::CertificateChoices;
use cms::content_info::ContentInfo;
use cms::signed_data::{SignedData, SignerIdentifier};
use der::{Decode, Encode};

use crate::crypto::digest::DigestAlgorithm;
use crate::error::TimestampError;
use crate::timestamp::types::MessageImprint;

/// A `SignerInfo`'s subject identifier, in either form CMS allows.
#[derive(Debug, Clone)]
pub enum Sid {
    IssuerAndSerialNumber { issuer_dn: String, serial: Vec<u8> },
    SubjectKeyIdentifier(Vec<u8>),
}

/// The fields of one `SignerInfo` this crate needs to match a candidate
/// certificate and verify the TSA's signature.
#[derive(Debug, Clone)]
pub struct ParsedSignerInfo {
    pub sid: Sid,
    pub digest_algorithm_oid: String,
    pub signature_algorithm_oid: String,
    pub signature_algorithm_params: Option<Vec<u8>>,
    pub signature: Vec<u8>,
    /// DER re-encoding of the `SET OF Attribute` the signature actually
    /// covers when signed attributes are present (RFC 5652 §5.4); `None`
    /// means the signature covers `econtent` directly.
    pub signed_attrs_der: Option<Vec<u8>>,
    /// The `message-digest` authenticated attribute, when signed attributes
    /// are present.
    pub signed_attrs_message_digest: Option<Vec<u8>>,
}

/// Parsed TSTInfo fields this crate needs (§3 `time_stamp`).
#[derive(Debug, Clone)]
pub struct TstInfo {
    pub gen_time: DateTime<Utc>,
    pub message_imprint: MessageImprint,
}

/// A fully parsed RFC 3161 TimeStampToken.
#[derive(Debug, Clone)]
pub struct Rfc3161Timestamp {
    pub tst_info: TstInfo,
    /// Raw DER of the encapsulated TSTInfo (the bytes `econtent` carries),
    /// needed to recompute the `message-digest` attribute.
    pub tst_info_der: Vec<u8>,
    pub certificates: Vec<Vec<u8>>,
    pub crls: Vec<Vec<u8>>,
    pub signer_infos: Vec<ParsedSignerInfo>,
    /// DER encoding of the whole token, for `Token::dss_id`.
    pub der_encoding: Vec<u8>,
}

pub fn parse_rfc3161_timestamp(der: &[u8]) -> Result<Rfc3161Timestamp, TimestampError> {
    let content_info = ContentInfo::from_der(der)
        .map_err(|e| TimestampError::Rfc3161Parse(format!("failed to parse ContentInfo: {e}")))?;

    let signed_data_bytes = content_info
        .content
        .to_der()
        .map_err(|e| TimestampError::Rfc3161Parse(format!("failed to re-encode SignedData: {e}")))?;

    let signed_data = SignedData::from_der(&signed_data_bytes)
        .map_err(|e| TimestampError::Rfc3161Parse(format!("failed to parse SignedData: {e}")))?;

    let econtent = signed_data
        .encap_content_info
        .econtent
        .as_ref()
        .ok_or_else(|| TimestampError::Rfc3161Parse("SignedData has no encapsulated content".into()))?
        .value()
        .to_vec();

    let tst_info = parse_tstinfo_asn1(&econtent)?;

    let certificates = signed_data
        .certificates
        .as_ref()
        .map(|set| {
            set.0
                .iter()
                .filter_map(|choice| match choice {
                    CertificateChoices::Certificate(cert) => cert.to_der().ok(),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    // CRLs embedded in the SignedData's `crls` field (if the CMS library in
    // use exposes it as raw `Any` entries, re-encode each to DER).
    let crls = signed_data
        .crls
        .as_ref()
        .map(|set| set.0.iter().filter_map(|any| any.to_der().ok()).collect())
        .unwrap_or_default();

    let signer_infos = signed_data
        .signer_infos
        .0
        .iter()
        .map(parse_signer_info)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Rfc3161Timestamp {
        tst_info,
        tst_info_der: econtent,
        certificates,
        crls,
        signer_infos,
        der_encoding: der.to_vec(),
    })
}

fn parse_signer_info(
    signer_info: &cms::signed_data::SignerInfo,
) -> Result<ParsedSignerInfo, TimestampError> {
    let sid = match &signer_info.sid {
        SignerIdentifier::IssuerAndSerialNumber(iasn) => Sid::IssuerAndSerialNumber {
            issuer_dn: iasn.issuer.to_string(),
            serial: iasn.serial_number.as_bytes().to_vec(),
        },
        SignerIdentifier::SubjectKeyIdentifier(ski) => Sid::SubjectKeyIdentifier(ski.0.as_bytes().to_vec()),
    };

    let (signed_attrs_der, signed_attrs_message_digest) = match &signer_info.signed_attrs {
        Some(attrs) => {
            let der_bytes = attrs
                .to_der()
                .map_err(|e| TimestampError::Rfc3161Parse(format!("failed to re-encode signed attrs: {e}")))?;
            let message_digest = attrs.iter().find_map(|attr| {
                if attr.oid.to_string() == "1.2.840.113549.1.9.4" {
                    attr.values.get(0).and_then(|v| v.to_der().ok())
                } else {
                    None
                }
            });
            (Some(der_bytes), message_digest)
        }
        None => (None, None),
    };

    Ok(ParsedSignerInfo {
        sid,
        digest_algorithm_oid: signer_info.digest_alg.oid.to_string(),
        signature_algorithm_oid: signer_info.signature_algorithm.oid.to_string(),
        signature_algorithm_params: signer_info
            .signature_algorithm
            .parameters
            .as_ref()
            .and_then(|p| p.to_der().ok()),
        signature: signer_info.signature.as_bytes().to_vec(),
        signed_attrs_der,
        signed_attrs_message_digest,
    })
}

/// `TSTInfo ::= SEQUENCE { version, policy, messageImprint, serialNumber,
/// genTime, ... }` — parsed field-by-field with `asn1-rs` exactly as the
/// teacher crate does, widened to recognize every digest OID in §6 rather
/// than just SHA-256/SHA-384.
fn parse_tstinfo_asn1(der: &[u8]) -> Result<TstInfo, TimestampError> {
    use asn1_rs::{Any, FromDer, Integer, Sequence};

    let (rem, tstinfo_seq) = Sequence::from_der(der)
        .map_err(|e| TimestampError::Rfc3161Parse(format!("failed to parse TSTInfo sequence: {e}")))?;
    let content = tstinfo_seq.content.as_ref();
    let _ = rem;

    let (rem, _version) = Integer::from_der(content)
        .map_err(|e| TimestampError::Rfc3161Parse(format!("failed to parse version: {e}")))?;

    let (rem, _policy) = Any::from_der(rem)
        .map_err(|e| TimestampError::Rfc3161Parse(format!("failed to parse policy: {e}")))?;

    let (rem, message_imprint_seq) = Sequence::from_der(rem)
        .map_err(|e| TimestampError::Rfc3161Parse(format!("failed to parse messageImprint: {e}")))?;
    let message_imprint = parse_message_imprint(&message_imprint_seq)?;

    let (rem, _serial) = Integer::from_der(rem)
        .map_err(|e| TimestampError::Rfc3161Parse(format!("failed to parse serialNumber: {e}")))?;

    let (_, gen_time_any) = Any::from_der(rem)
        .map_err(|e| TimestampError::Rfc3161Parse(format!("failed to parse genTime: {e}")))?;
    let gen_time = parse_generalized_time(gen_time_any.as_bytes())?;

    Ok(TstInfo {
        gen_time,
        message_imprint,
    })
}

fn parse_message_imprint(seq: &asn1_rs::Sequence) -> Result<MessageImprint, TimestampError> {
    use asn1_rs::{FromDer, OctetString, Sequence};

    let content = seq.content.as_ref();
    let (rem, hash_alg_seq) = Sequence::from_der(content)
        .map_err(|e| TimestampError::Rfc3161Parse(format!("failed to parse hashAlgorithm: {e}")))?;
    let algorithm = parse_hash_algorithm(&hash_alg_seq)?;

    let (_, hashed_message) = OctetString::from_der(rem)
        .map_err(|e| TimestampError::Rfc3161Parse(format!("failed to parse hashedMessage: {e}")))?;

    Ok(MessageImprint {
        algorithm,
        value: hashed_message.as_cow().to_vec(),
    })
}

fn parse_hash_algorithm(seq: &asn1_rs::Sequence) -> Result<DigestAlgorithm, TimestampError> {
    use asn1_rs::{FromDer, Oid};

    let content = seq.content.as_ref();
    let (_, oid) = Oid::from_der(content)
        .map_err(|e| TimestampError::Rfc3161Parse(format!("failed to parse algorithm OID: {e}")))?;
    let oid_str = oid.to_string();
    DigestAlgorithm::from_oid(&oid_str).ok_or(TimestampError::UnsupportedDigestAlgorithm(oid_str))
}

/// `GeneralizedTime` → `DateTime<Utc>`, format `YYYYMMDDHHMMSS[.fff]Z`.
fn parse_generalized_time(der: &[u8]) -> Result<DateTime<Utc>, TimestampError> {
    use asn1_rs::{FromDer, GeneralizedTime};

    let (_, gen_time) = GeneralizedTime::from_der(der)
        .map_err(|e| TimestampError::Rfc3161Parse(format!("failed to parse GeneralizedTime: {e}")))?;

    let time_str = gen_time.to_string();
    let trimmed = time_str.trim_end_matches('Z');
    let date_time_part = trimmed.split('.').next().unwrap_or(trimmed);

    if date_time_part.len() < 14 {
        return Err(TimestampError::Rfc3161Parse(format!(
            "invalid GeneralizedTime: {time_str}"
        )));
    }

    let field = |range: std::ops::Range<usize>| -> Result<u32, TimestampError> {
        date_time_part[range]
            .parse()
            .map_err(|_| TimestampError::Rfc3161Parse(format!("invalid GeneralizedTime: {time_str}")))
    };

    let year = field(0..4)? as i32;
    let month = field(4..6)?;
    let day = field(6..8)?;
    let hour = field(8..10)?;
    let minute = field(10..12)?;
    let second = field(12..14)?;

    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .ok_or_else(|| TimestampError::Rfc3161Parse(format!("invalid date/time values: {time_str}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generalized_time_parses_basic_form() {
        // Tag 0x18 (GeneralizedTime), length 15, ASCII "20230615120000Z".
        let ascii = b"20230615120000Z";
        let mut der = vec![0x18u8, ascii.len() as u8];
        der.extend_from_slice(ascii);
        let parsed = parse_generalized_time(&der).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2023-06-15T12:00:00+00:00");
    }
}
