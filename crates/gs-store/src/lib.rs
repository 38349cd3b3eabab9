pub mod connection;
pub mod document;
pub mod error;
pub mod repositories;
pub mod retry;

pub use connection::document_store::DocumentStore;
pub use connection::store_handle::StoreHandle;
pub use connection::store_session::StoreSession;
pub use connection::transaction::Transaction;
pub use document::{Document, from_document, to_document};
pub use error::{Result, StoreError};
pub use repositories::id_allocator::IdAllocator;
pub use repositories::inventory_repository::InventoryRepository;
pub use repositories::item_repository::ItemRepository;
pub use repositories::user_repository::UserRepository;
pub use retry::RetryConfig;
