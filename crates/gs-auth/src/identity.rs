use crate::Result as AuthErrorResult;

use async_trait::async_trait;

/// An externally verified identity. The directory only needs the email;
/// everything else about the account is derived or defaulted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub email: String,
}

/// Verifies a client-supplied identity token with an external authority.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> AuthErrorResult<VerifiedIdentity>;
}
