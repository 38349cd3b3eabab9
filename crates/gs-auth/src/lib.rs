pub mod claims;
pub mod error;
pub mod google_verifier;
pub mod identity;
pub mod password;
pub mod token_service;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use google_verifier::GoogleVerifier;
pub use identity::{IdentityVerifier, VerifiedIdentity};
pub use password::password_matches;
pub use token_service::TokenService;
