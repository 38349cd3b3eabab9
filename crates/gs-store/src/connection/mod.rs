pub mod document_store;
pub mod store_handle;
pub mod store_session;
pub mod transaction;
