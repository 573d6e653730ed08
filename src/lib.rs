//! A format-agnostic model of AdES (XAdES/CAdES/PAdES) advanced electronic
//! signatures, plus standalone RFC 3161 TimeStampToken parsing and
//! verification.
//!
//! This crate owns the *evidential* core: given signer certificates,
//! timestamp tokens, and the bytes a signature covers, it answers "is this
//! cryptographically intact, and what level does it reach" without itself
//! fetching certificates, building trust chains, or parsing container
//! byte formats (CMS/XML-DSig/PDF). Those are supplied by the host
//! application through the small capability traits in [`certificate`],
//! [`timestamp`], and [`validation_context`].
//!
//! Start at [`signature::AdvancedSignature`] for the per-signature contract,
//! or [`signature::counter::SignatureRegistry`] when a validation session
//! has to resolve counter-signature links across more than one signature.

pub mod certificate;
pub mod crypto;
pub mod error;
pub mod signature;
pub mod timestamp;
pub mod token;
pub mod validation_context;

pub use error::CoreError;
pub use signature::{AdvancedSignature, GenericAdvancedSignature, SignatureForm};
pub use token::{DssId, Token, ValidityOutcome};
