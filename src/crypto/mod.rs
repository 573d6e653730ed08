pub mod backend;
pub mod digest;
pub mod signature;

pub use backend::{CryptoBackend, CryptoProvider, Verifier};
pub use digest::DigestAlgorithm;
pub use signature::{EncryptionAlgorithm, PssParameters, PublicKey, SignatureAlgorithm};
