pub mod register_request;
pub mod user_dto;
pub mod users;
