#![allow(dead_code)]

//! Test infrastructure for gs-server API tests

use gs_auth::{AuthError, IdentityVerifier, TokenService, VerifiedIdentity};
use gs_config::StoreCredentials;
use gs_core::{ErrorLocation, Item, NewItem, NewUser, User};
use gs_server::AppState;
use gs_store::{ItemRepository, StoreHandle, UserRepository};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;

/// Identity verifier that accepts a fixed set of tokens, standing in for
/// the Google-backed verifier in tests
pub struct ScriptedVerifier {
    identities: HashMap<String, String>,
}

impl ScriptedVerifier {
    pub fn new() -> Self {
        Self {
            identities: HashMap::new(),
        }
    }

    /// Accept `token` as proof of `email`
    pub fn accept(mut self, token: &str, email: &str) -> Self {
        self.identities.insert(token.to_string(), email.to_string());
        self
    }
}

#[async_trait]
impl IdentityVerifier for ScriptedVerifier {
    async fn verify(&self, token: &str) -> gs_auth::Result<VerifiedIdentity> {
        match self.identities.get(token) {
            Some(email) => Ok(VerifiedIdentity {
                email: email.clone(),
            }),
            None => Err(AuthError::IdentityRejected {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Create AppState backed by a fresh store and a verifier that rejects
/// every token
pub fn create_test_app_state() -> AppState {
    create_test_app_state_with_verifier(ScriptedVerifier::new())
}

/// Create AppState backed by a fresh store and the given verifier
pub fn create_test_app_state_with_verifier(verifier: ScriptedVerifier) -> AppState {
    let credentials = StoreCredentials {
        project_id: "game-service-test".to_string(),
        client_email: None,
    };

    AppState {
        store: Arc::new(StoreHandle::connect(credentials)),
        tokens: Arc::new(TokenService::new(600)),
        verifier: Arc::new(verifier),
    }
}

/// Create an account directly in the store, bypassing the HTTP layer
pub async fn create_test_account(state: &AppState, email: &str, password: &str) -> User {
    UserRepository::new(state.store.clone())
        .create(NewUser {
            email: email.to_string(),
            password: password.to_string(),
            nickname: "Tester".to_string(),
        })
        .await
        .expect("Failed to create test account")
}

/// Create an externally-authenticated account directly in the store
pub async fn create_external_account(state: &AppState, email: &str) -> User {
    UserRepository::new(state.store.clone())
        .create_from_external_identity(email)
        .await
        .expect("Failed to create external test account")
}

/// Create a redeemable catalog item directly in the store
pub async fn create_test_item(state: &AppState, name: &str, code: &str) -> Item {
    ItemRepository::new(state.store.clone())
        .create(NewItem {
            name: name.to_string(),
            description: Some(format!("{} description", name)),
            category: Some("weapon".to_string()),
            rarity: Some("common".to_string()),
            value: 100,
            icon: Some("icon.png".to_string()),
            redeem_code: Some(code.into()),
            active: None,
        })
        .await
        .expect("Failed to create test item")
}

/// Authorization header value for `user`
pub fn bearer_for(state: &AppState, user: &User) -> String {
    let token = state.tokens.issue(user).expect("Failed to issue token");
    format!("Bearer {}", token)
}
