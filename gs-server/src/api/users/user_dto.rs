use gs_core::User;

use serde::Serialize;

/// User DTO for JSON serialization. Never carries the password.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub nickname: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            nickname: u.nickname,
        }
    }
}
