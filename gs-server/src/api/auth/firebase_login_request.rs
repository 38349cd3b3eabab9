use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FirebaseLoginRequest {
    /// Google-issued ID token or OAuth access token (required)
    #[serde(default)]
    pub token: String,
}
