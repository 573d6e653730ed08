//! Signature policy resolution (§4.4 `check_signature_policy`, §6
//! `SignaturePolicyProvider`). Policy documents themselves are fetched and
//! parsed by an external collaborator; this crate only resolves a policy
//! identifier through the injected provider and records the outcome.

/// A resolved signature policy (only the fields this crate's evidence
/// recording needs; the policy document's own rules are evaluated by an
/// external policy engine, not this crate).
#[derive(Debug, Clone)]
pub struct SignaturePolicy {
    pub id: String,
    pub description: Option<String>,
}

/// Strategy that resolves a policy identifier to a `SignaturePolicy`.
pub trait SignaturePolicyProvider {
    fn resolve(&self, policy_id: &str) -> Option<SignaturePolicy>;
}

/// Default provider that never resolves anything — used when no policy
/// store is injected.
#[derive(Debug, Default)]
pub struct NullPolicyProvider;

impl SignaturePolicyProvider for NullPolicyProvider {
    fn resolve(&self, _policy_id: &str) -> Option<SignaturePolicy> {
        None
    }
}
