//! RFC 3161 timestamp parsing, classification, and verification (§3, §4.2,
//! §4.3).

pub mod rfc3161;
pub mod source;
pub mod token;
pub mod types;

pub use source::TimestampSource;
pub use token::TimestampToken;
pub use types::{
    ArchiveTimestampType, MatchOutcome, MessageImprint, ReferenceCategory, TimestampLocation,
    TimestampType, TimestampedReference,
};
