use std::panic::Location;

use gs_core::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store session is closed {location}")]
    SessionClosed { location: ErrorLocation },

    #[error("Document serialization failed: {source} {location}")]
    Serialization {
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Document {collection}/{id} not found {location}")]
    DocumentNotFound {
        collection: String,
        id: String,
        location: ErrorLocation,
    },

    #[error("Transaction gave up after {attempts} conflicting attempts {location}")]
    TransactionConflict { attempts: u32, location: ErrorLocation },

    #[error("Invalid document: {message} {location}")]
    InvalidDocument {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// True when the failure came from a closed session and the operation
    /// can be replayed against a fresh one.
    pub fn is_session_closed(&self) -> bool {
        matches!(self, Self::SessionClosed { .. })
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
