//! User account - the identity a game client logs in with.

use serde::{Deserialize, Serialize};

/// Password value stored for accounts created through an external identity
/// provider. Password login must always be rejected for these accounts.
pub const EXTERNAL_AUTH_SENTINEL: &str = "firebase";

/// A registered player. The `id` is allocated from the counter document and
/// never changes once assigned. Stored documents carry every field including
/// `id`; the HTTP layer strips `password` before responding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub nickname: String,
}

/// A user record before an id has been allocated for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub nickname: String,
}

impl User {
    /// True when the account was created from a verified external identity
    /// and therefore has no usable password.
    pub fn is_externally_authenticated(&self) -> bool {
        self.password == EXTERNAL_AUTH_SENTINEL
    }
}

impl NewUser {
    /// Derive an account from an externally verified email address: nickname
    /// is the local part of the address, password is the sentinel.
    pub fn from_external_identity(email: &str) -> Self {
        let nickname = match email.find('@') {
            Some(at) => &email[..at],
            None => email,
        };

        Self {
            email: email.to_string(),
            password: EXTERNAL_AUTH_SENTINEL.to_string(),
            nickname: nickname.to_string(),
        }
    }

    /// Attach the allocated id, producing the persistable record.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            email: self.email,
            password: self.password,
            nickname: self.nickname,
        }
    }
}
