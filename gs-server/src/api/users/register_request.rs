use gs_core::NewUser;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Account email (required)
    #[serde(default)]
    pub email: String,

    /// Account password (required)
    #[serde(default)]
    pub password: String,

    /// Display name shown to other players
    #[serde(default)]
    pub nickname: String,
}

impl From<RegisterRequest> for NewUser {
    fn from(r: RegisterRequest) -> Self {
        Self {
            email: r.email,
            password: r.password,
            nickname: r.nickname,
        }
    }
}
