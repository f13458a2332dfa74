//! Book domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput},
};

/// Ordered books plus the id counter.
///
/// The counter only moves forward, so deleted ids are never handed out again.
#[derive(Debug)]
pub(super) struct Shelf {
    books: Vec<Book>,
    next_id: i64,
}

impl Shelf {
    pub(super) fn new(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0).max(0) + 1;
        Self { books, next_id }
    }

    fn insert(&mut self, input: BookInput) -> Book {
        let book = input.into_book(self.next_id);
        self.next_id += 1;
        self.books.push(book.clone());
        book
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("book with id {} not found", id))
}

impl Repository {
    /// Copy of every book in store order
    pub async fn books_list(&self) -> Vec<Book> {
        self.books.read().await.books.clone()
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: i64) -> AppResult<Book> {
        let shelf = self.books.read().await;
        shelf
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    pub async fn books_count(&self) -> usize {
        self.books.read().await.books.len()
    }

    /// Append a book under a freshly assigned id
    pub async fn books_create(&self, input: BookInput) -> Book {
        self.books.write().await.insert(input)
    }

    /// Append several books; ids are contiguous and follow input order
    pub async fn books_create_many(&self, inputs: Vec<BookInput>) -> Vec<Book> {
        let mut shelf = self.books.write().await;
        inputs.into_iter().map(|input| shelf.insert(input)).collect()
    }

    /// Replace the book whose id matches `input.id`, keeping its position
    pub async fn books_update(&self, input: BookInput) -> AppResult<Book> {
        let mut shelf = self.books.write().await;
        let id = input.id;
        let slot = shelf
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| not_found(id))?;
        *slot = input.into_book(id);
        Ok(slot.clone())
    }

    /// Remove a book, preserving the order of the rest
    pub async fn books_delete(&self, id: i64) -> AppResult<()> {
        let mut shelf = self.books.write().await;
        let index = shelf
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| not_found(id))?;
        shelf.books.remove(index);
        Ok(())
    }
}
