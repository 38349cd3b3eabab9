pub mod create_item_request;
pub mod item_dto;
pub mod items;
