use std::sync::Arc;

use gs_auth::{IdentityVerifier, TokenService};
use gs_store::StoreHandle;

/// Shared state handed to every handler.
///
/// The identity verifier is behind a trait object so tests can swap the
/// Google-backed implementation for a scripted one.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<StoreHandle>,
    pub tokens: Arc<TokenService>,
    pub verifier: Arc<dyn IdentityVerifier>,
}
