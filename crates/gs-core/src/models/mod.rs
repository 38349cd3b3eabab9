pub mod inventory_entry;
pub mod item;
pub mod redeem_code;
pub mod user;
