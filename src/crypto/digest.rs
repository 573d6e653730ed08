//! Digest algorithm identifiers and hashing, covering the OID table in
//! specification §6. Grounded on the teacher crate's `HashAlgorithm` enum
//! in `parser::rfc3161` (which covered SHA-256/SHA-384 only), widened to
//! the full set AdES containers are required to recognize, including the
//! legacy algorithms (SHA-1, MD5) still seen in historical timestamps.

use sha1::Sha1;
use sha2::{Digest as _, Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Ripemd160,
    Whirlpool,
    Md5,
}

impl DigestAlgorithm {
    /// Map a digest algorithm OID (as found in a CMS `AlgorithmIdentifier`)
    /// to a `DigestAlgorithm`.
    pub fn from_oid(oid: &str) -> Option<Self> {
        Some(match oid {
            "1.3.14.3.2.26" => DigestAlgorithm::Sha1,
            "2.16.840.1.101.3.4.2.4" => DigestAlgorithm::Sha224,
            "2.16.840.1.101.3.4.2.1" => DigestAlgorithm::Sha256,
            "2.16.840.1.101.3.4.2.2" => DigestAlgorithm::Sha384,
            "2.16.840.1.101.3.4.2.3" => DigestAlgorithm::Sha512,
            "2.16.840.1.101.3.4.2.7" => DigestAlgorithm::Sha3_224,
            "2.16.840.1.101.3.4.2.8" => DigestAlgorithm::Sha3_256,
            "2.16.840.1.101.3.4.2.9" => DigestAlgorithm::Sha3_384,
            "2.16.840.1.101.3.4.2.10" => DigestAlgorithm::Sha3_512,
            "1.3.36.3.2.1" => DigestAlgorithm::Ripemd160,
            "1.0.10118.3.0.55" => DigestAlgorithm::Whirlpool,
            "1.2.840.113549.2.5" => DigestAlgorithm::Md5,
            _ => return None,
        })
    }

    pub fn oid(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "1.3.14.3.2.26",
            DigestAlgorithm::Sha224 => "2.16.840.1.101.3.4.2.4",
            DigestAlgorithm::Sha256 => "2.16.840.1.101.3.4.2.1",
            DigestAlgorithm::Sha384 => "2.16.840.1.101.3.4.2.2",
            DigestAlgorithm::Sha512 => "2.16.840.1.101.3.4.2.3",
            DigestAlgorithm::Sha3_224 => "2.16.840.1.101.3.4.2.7",
            DigestAlgorithm::Sha3_256 => "2.16.840.1.101.3.4.2.8",
            DigestAlgorithm::Sha3_384 => "2.16.840.1.101.3.4.2.9",
            DigestAlgorithm::Sha3_512 => "2.16.840.1.101.3.4.2.10",
            DigestAlgorithm::Ripemd160 => "1.3.36.3.2.1",
            DigestAlgorithm::Whirlpool => "1.0.10118.3.0.55",
            DigestAlgorithm::Md5 => "1.2.840.113549.2.5",
        }
    }

    /// Digest `data` with this algorithm.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            DigestAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            DigestAlgorithm::Sha224 => Sha224::digest(data).to_vec(),
            DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            DigestAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            DigestAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
            DigestAlgorithm::Sha3_224 => Sha3_224::digest(data).to_vec(),
            DigestAlgorithm::Sha3_256 => Sha3_256::digest(data).to_vec(),
            DigestAlgorithm::Sha3_384 => Sha3_384::digest(data).to_vec(),
            DigestAlgorithm::Sha3_512 => Sha3_512::digest(data).to_vec(),
            DigestAlgorithm::Ripemd160 => ripemd::Ripemd160::digest(data).to_vec(),
            DigestAlgorithm::Whirlpool => whirlpool::Whirlpool::digest(data).to_vec(),
            DigestAlgorithm::Md5 => md5::Md5::digest(data).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_roundtrips_oid() {
        let alg = DigestAlgorithm::from_oid(DigestAlgorithm::Sha256.oid()).unwrap();
        assert_eq!(alg, DigestAlgorithm::Sha256);
    }

    #[test]
    fn unknown_oid_is_none() {
        assert!(DigestAlgorithm::from_oid("9.9.9.9").is_none());
    }

    #[test]
    fn digest_lengths_match_algorithm() {
        assert_eq!(DigestAlgorithm::Sha1.digest(b"x").len(), 20);
        assert_eq!(DigestAlgorithm::Sha256.digest(b"x").len(), 32);
        assert_eq!(DigestAlgorithm::Sha384.digest(b"x").len(), 48);
        assert_eq!(DigestAlgorithm::Sha512.digest(b"x").len(), 64);
        assert_eq!(DigestAlgorithm::Md5.digest(b"x").len(), 16);
    }
}
