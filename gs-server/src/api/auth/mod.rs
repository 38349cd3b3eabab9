pub mod auth;
pub mod bearer;
pub mod firebase_login_request;
pub mod login_request;
pub mod login_response;
