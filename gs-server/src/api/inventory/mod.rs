pub mod inventory;
pub mod inventory_entry_dto;
pub mod redeem_request;
