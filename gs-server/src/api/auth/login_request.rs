use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Account email (required)
    #[serde(default)]
    pub email: String,

    /// Account password (required)
    #[serde(default)]
    pub password: String,
}
