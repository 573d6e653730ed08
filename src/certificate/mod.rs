pub mod pool;
pub mod source;
pub mod token;

pub use pool::CertificatePool;
pub use source::{
    CertificateSource, CrlSource, ListCertificateSource, ListCrlSource, ListOcspSource,
    OcspSource, RevocationToken, SourceType,
};
pub use token::{CertificateToken, X509CertificateToken};
