mod inventory_entry;
mod item;
mod redeem_code;
mod user;
