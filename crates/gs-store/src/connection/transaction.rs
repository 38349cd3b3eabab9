//! One transaction attempt's view of the store.
//!
//! Reads observe committed state only and are recorded, including the id and
//! version of every document an equality query matched, so commit validation
//! also catches a concurrent insert that would have changed the query's
//! result. Writes are buffered and never visible to the body's own reads.

use serde_json::Value;

use crate::connection::document_store::{StoreState, new_document_id, owned_filters};
use crate::document::Document;

pub(crate) struct ReadRecord {
    pub collection: String,
    pub id: String,
    pub observed: Option<u64>,
}

pub(crate) struct QueryRecord {
    pub collection: String,
    pub filters: Vec<(String, Value)>,
    pub observed: Vec<(String, u64)>,
}

pub(crate) enum WriteOp {
    Insert {
        collection: String,
        id: String,
        data: Document,
    },
    Set {
        collection: String,
        id: String,
        data: Document,
    },
    Update {
        collection: String,
        id: String,
        fields: Document,
    },
}

pub(crate) struct TransactionFootprint {
    pub reads: Vec<ReadRecord>,
    pub queries: Vec<QueryRecord>,
    pub writes: Vec<WriteOp>,
}

/// Handed to a [`DocumentStore::run_transaction`] body. The body may run
/// more than once, each time against a fresh `Transaction`.
///
/// [`DocumentStore::run_transaction`]: crate::DocumentStore::run_transaction
pub struct Transaction<'a> {
    state: &'a StoreState,
    reads: Vec<ReadRecord>,
    queries: Vec<QueryRecord>,
    writes: Vec<WriteOp>,
}

impl<'a> Transaction<'a> {
    pub(crate) fn new(state: &'a StoreState) -> Self {
        Self {
            state,
            reads: Vec::new(),
            queries: Vec::new(),
            writes: Vec::new(),
        }
    }

    /// Read one document; its observed version (or absence) is validated at
    /// commit.
    pub fn get(&mut self, collection: &str, id: &str) -> Option<Document> {
        let found = self.state.document(collection, id);
        self.reads.push(ReadRecord {
            collection: collection.to_string(),
            id: id.to_string(),
            observed: found.map(|doc| doc.version),
        });
        found.map(|doc| doc.data.clone())
    }

    /// Equality query; the matched set is revalidated at commit, so the
    /// transaction aborts when a concurrent write adds, removes, or touches
    /// a matching document.
    pub fn find_eq(&mut self, collection: &str, filters: &[(&str, Value)]) -> Vec<(String, Document)> {
        let filters = owned_filters(filters);

        let mut observed = Vec::new();
        let mut matched = Vec::new();
        for (id, doc) in self.state.matching(collection, &filters) {
            observed.push((id.clone(), doc.version));
            matched.push((id.clone(), doc.data.clone()));
        }

        self.queries.push(QueryRecord {
            collection: collection.to_string(),
            filters,
            observed,
        });
        matched
    }

    /// Buffer a new document; the returned id is final if the transaction
    /// commits, and discarded with the attempt otherwise.
    pub fn insert(&mut self, collection: &str, data: Document) -> String {
        let id = new_document_id();
        self.writes.push(WriteOp::Insert {
            collection: collection.to_string(),
            id: id.clone(),
            data,
        });
        id
    }

    /// Buffer a create-or-replace at a caller-chosen id.
    pub fn set(&mut self, collection: &str, id: &str, data: Document) {
        self.writes.push(WriteOp::Set {
            collection: collection.to_string(),
            id: id.to_string(),
            data,
        });
    }

    /// Buffer a field merge into a document that must exist at commit.
    pub fn update(&mut self, collection: &str, id: &str, fields: Document) {
        self.writes.push(WriteOp::Update {
            collection: collection.to_string(),
            id: id.to_string(),
            fields,
        });
    }

    pub(crate) fn into_footprint(self) -> TransactionFootprint {
        TransactionFootprint {
            reads: self.reads,
            queries: self.queries,
            writes: self.writes,
        }
    }
}
