//! Counter-signature registry (§9 design note: "forms a graph with
//! potential cycles if abused... hold the link as a non-owning reference
//! resolved by id in the session-level signature registry"). Signatures
//! reference their master by id rather than embedding a pointer, so the
//! registry can reject a `set_master_signature` call that would close a
//! cycle before the bad link is ever recorded.

use std::collections::HashMap;

use crate::error::ContractViolation;
use crate::signature::GenericAdvancedSignature;

/// Owns every `GenericAdvancedSignature` in one validation session and
/// resolves counter-signature links by id (§4.4 `counter_signatures`, P7).
#[derive(Default)]
pub struct SignatureRegistry {
    signatures: HashMap<String, GenericAdvancedSignature>,
}

impl SignatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, signature: GenericAdvancedSignature) {
        self.signatures.insert(signature.id.clone(), signature);
    }

    pub fn get(&self, id: &str) -> Option<&GenericAdvancedSignature> {
        self.signatures.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut GenericAdvancedSignature> {
        self.signatures.get_mut(id)
    }

    /// Link `child_id` as a counter-signature of `master_id`. Walks the
    /// prospective master's own parent chain first; if `child_id` appears
    /// in it, linking would close a cycle and the call is rejected.
    pub fn set_master_signature(&mut self, child_id: &str, master_id: &str) -> Result<(), ContractViolation> {
        if child_id == master_id {
            return Err(ContractViolation::CounterSignatureCycle);
        }

        let mut cursor = Some(master_id.to_string());
        let mut visited = 0usize;
        while let Some(current) = cursor {
            if current == child_id {
                return Err(ContractViolation::CounterSignatureCycle);
            }
            visited += 1;
            if visited > self.signatures.len() + 1 {
                // Already-corrupt graph (shouldn't happen if every prior
                // link went through this method); fail closed.
                return Err(ContractViolation::CounterSignatureCycle);
            }
            cursor = self
                .signatures
                .get(&current)
                .and_then(|s| s.master_signature_id.clone());
        }

        if let Some(child) = self.signatures.get_mut(child_id) {
            child.master_signature_id = Some(master_id.to_string());
        }
        Ok(())
    }

    /// Every signature whose `master_signature_id` points at `id` (§4.4,
    /// P7: `cs.master_signature == s`).
    pub fn counter_signatures(&self, id: &str) -> Vec<&GenericAdvancedSignature> {
        self.signatures
            .values()
            .filter(|s| s.master_signature_id.as_deref() == Some(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{CadesDetails, GenericAdvancedSignature, SignatureForm};

    fn sig(id: &str) -> GenericAdvancedSignature {
        GenericAdvancedSignature::new(id.to_string(), SignatureForm::CAdES(CadesDetails::default()))
    }

    #[test]
    fn direct_cycle_is_rejected() {
        let mut registry = SignatureRegistry::new();
        registry.insert(sig("a"));
        registry.insert(sig("b"));
        registry.set_master_signature("b", "a").unwrap();
        // a -> b would close the cycle a -> b -> a.
        assert!(registry.set_master_signature("a", "b").is_err());
    }

    #[test]
    fn self_reference_is_rejected() {
        let mut registry = SignatureRegistry::new();
        registry.insert(sig("a"));
        assert!(registry.set_master_signature("a", "a").is_err());
    }

    #[test]
    fn valid_chain_is_accepted_and_queryable() {
        let mut registry = SignatureRegistry::new();
        registry.insert(sig("a"));
        registry.insert(sig("b"));
        registry.insert(sig("c"));
        registry.set_master_signature("b", "a").unwrap();
        registry.set_master_signature("c", "b").unwrap();

        let counter_signatures_of_a = registry.counter_signatures("a");
        assert_eq!(counter_signatures_of_a.len(), 1);
        assert_eq!(counter_signatures_of_a[0].id, "b");
    }
}
