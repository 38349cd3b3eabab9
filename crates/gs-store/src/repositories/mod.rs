pub mod id_allocator;
pub mod inventory_repository;
pub mod item_repository;
pub mod user_repository;
