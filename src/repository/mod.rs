//! Repository layer for the in-memory book collection

pub mod books;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::book::Book;

/// Main repository struct holding the shared book collection.
///
/// Every read-modify-write sequence runs under a single lock acquisition.
#[derive(Clone)]
pub struct Repository {
    books: Arc<RwLock<books::Shelf>>,
}

impl Repository {
    /// Create a repository with an empty collection
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Create a repository holding `books` in the given order
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books::Shelf::new(books))),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
