pub mod error;
pub mod models;

pub use error::error_location::ErrorLocation;
pub use models::inventory_entry::InventoryEntry;
pub use models::item::{Item, NewItem};
pub use models::redeem_code::RedeemCode;
pub use models::user::{EXTERNAL_AUTH_SENTINEL, NewUser, User};

#[cfg(test)]
mod tests;
