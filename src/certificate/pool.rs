//! `CertificatePool` — the one structure shared across independently
//! validated signatures (§5). Mutating operations are serialized behind a
//! single mutex; the pool is not on a hot path so a single lock is
//! sufficient, per the concurrency model.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::certificate::source::SourceType;
use crate::certificate::token::CertificateToken;
use crate::token::DssId;

struct Entry {
    token: Arc<dyn CertificateToken>,
    sources: HashSet<SourceType>,
}

/// A deduplicating registry from `DssId` to the canonical `CertificateToken`
/// instance plus the set of sources that contributed it. The same physical
/// certificate bytes never produce two distinct entries.
#[derive(Clone)]
pub struct CertificatePool {
    inner: Arc<Mutex<HashMap<DssId, Entry>>>,
}

impl CertificatePool {
    pub fn new() -> Self {
        CertificatePool {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Insert `token` tagged with `source`, returning the canonical shared
    /// instance (either `token` itself if new, or the one already held).
    pub fn add(
        &self,
        token: Arc<dyn CertificateToken>,
        source: SourceType,
    ) -> Arc<dyn CertificateToken> {
        let id = token.dss_id();
        let mut guard = self.inner.lock().expect("certificate pool mutex poisoned");
        let entry = guard.entry(id).or_insert_with(|| Entry {
            token: token.clone(),
            sources: HashSet::new(),
        });
        entry.sources.insert(source);
        entry.token.clone()
    }

    pub fn get(&self, id: &DssId) -> Option<Arc<dyn CertificateToken>> {
        let guard = self.inner.lock().expect("certificate pool mutex poisoned");
        guard.get(id).map(|e| e.token.clone())
    }

    pub fn sources_for(&self, id: &DssId) -> HashSet<SourceType> {
        let guard = self.inner.lock().expect("certificate pool mutex poisoned");
        guard.get(id).map(|e| e.sources.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("certificate pool mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CertificatePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Dummy {
        der: Vec<u8>,
    }
    impl CertificateToken for Dummy {
        fn der_encoding(&self) -> &[u8] {
            &self.der
        }
        fn public_key_der(&self) -> &[u8] {
            &[]
        }
        fn public_key_algorithm_name(&self) -> &str {
            "test"
        }
        fn subject_dn(&self) -> &str {
            "CN=test"
        }
        fn issuer_dn(&self) -> &str {
            "CN=test"
        }
        fn serial_number(&self) -> &str {
            "1"
        }
        fn subject_key_identifier(&self) -> Option<&[u8]> {
            None
        }
    }

    #[test]
    fn same_bytes_collapse_to_one_entry() {
        let pool = CertificatePool::new();
        let a: Arc<dyn CertificateToken> = Arc::new(Dummy { der: vec![1, 2, 3] });
        let b: Arc<dyn CertificateToken> = Arc::new(Dummy { der: vec![1, 2, 3] });

        pool.add(a, SourceType::Signature);
        pool.add(b, SourceType::Timestamp);

        assert_eq!(pool.len(), 1);
        let id = DssId::from_der(&[1, 2, 3]);
        let sources = pool.sources_for(&id);
        assert_eq!(sources.len(), 2);
    }

    #[test]
    fn different_bytes_produce_distinct_entries() {
        let pool = CertificatePool::new();
        pool.add(Arc::new(Dummy { der: vec![1] }), SourceType::Signature);
        pool.add(Arc::new(Dummy { der: vec![2] }), SourceType::Signature);
        assert_eq!(pool.len(), 2);
    }
}
