use crate::error::{AuthError, Result as AuthErrorResult};
use crate::identity::{IdentityVerifier, VerifiedIdentity};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use gs_core::ErrorLocation;
use serde::Deserialize;

/// Verifies Google-issued tokens.
///
/// The client may send either an ID token or an OAuth access token, so the
/// tokeninfo endpoint is asked first and the userinfo endpoint second, with
/// the same string as a bearer token. Whichever endpoint answers with an
/// email settles the identity; when neither does, the token is rejected.
pub struct GoogleVerifier {
    client: reqwest::Client,
    tokeninfo_url: String,
    userinfo_url: String,
}

#[derive(Debug, Deserialize)]
struct TokenClaims {
    email: Option<String>,
}

impl GoogleVerifier {
    #[track_caller]
    pub fn new(
        tokeninfo_url: impl Into<String>,
        userinfo_url: impl Into<String>,
        timeout: Duration,
    ) -> AuthErrorResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::VerificationRequest {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            client,
            tokeninfo_url: tokeninfo_url.into(),
            userinfo_url: userinfo_url.into(),
        })
    }

    /// Ask tokeninfo about an ID token. A rejection or an answer without an
    /// email is `None`, not an error.
    async fn check_id_token(&self, token: &str) -> AuthErrorResult<Option<String>> {
        let response = self
            .client
            .get(&self.tokeninfo_url)
            .query(&[("id_token", token)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let claims: TokenClaims = response.json().await?;
        Ok(claims.email)
    }

    /// Ask userinfo, treating the token as an OAuth access token.
    async fn check_access_token(&self, token: &str) -> AuthErrorResult<Option<String>> {
        let response = self
            .client
            .get(&self.userinfo_url)
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let claims: TokenClaims = response.json().await?;
        Ok(claims.email)
    }
}

#[async_trait]
impl IdentityVerifier for GoogleVerifier {
    async fn verify(&self, token: &str) -> AuthErrorResult<VerifiedIdentity> {
        match self.check_id_token(token).await {
            Ok(Some(email)) => return Ok(VerifiedIdentity { email }),
            Ok(None) => log::debug!("tokeninfo rejected the token, trying userinfo"),
            Err(error) => log::debug!("tokeninfo call failed ({error}), trying userinfo"),
        }

        match self.check_access_token(token).await? {
            Some(email) => Ok(VerifiedIdentity { email }),
            None => Err(AuthError::IdentityRejected {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
