use crate::UserDto;

use serde::Serialize;

/// Successful login response: the account plus a fresh bearer token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserDto,
    pub token: String,
}
