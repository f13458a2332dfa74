//! Book catalog service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput, BookQuery, SortOrder},
    repository::Repository,
};

/// List options decoded from the raw query string
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub title: Option<String>,
    pub sort: Option<SortOrder>,
    pub limit: Option<usize>,
}

impl ListOptions {
    /// Decode `title`, `sort` and `limit`; empty values count as absent
    pub fn from_query(query: &BookQuery) -> AppResult<Self> {
        let title = query.title.clone().filter(|t| !t.is_empty());
        let sort = query.sort.as_deref().and_then(SortOrder::from_param);
        let limit = match query.limit.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<usize>()
                    .map_err(|_| AppError::BadRequest("invalid limit parameter".to_string()))?,
            ),
        };

        Ok(Self { title, sort, limit })
    }

    /// Filter, then sort, then truncate
    pub fn apply(&self, mut books: Vec<Book>) -> Vec<Book> {
        if let Some(ref title) = self.title {
            books.retain(|b| b.title.contains(title.as_str()));
        }

        match self.sort {
            Some(SortOrder::Asc) => books.sort_by(|a, b| a.id.cmp(&b.id)),
            Some(SortOrder::Desc) => books.sort_by(|a, b| b.id.cmp(&a.id)),
            None => {}
        }

        if let Some(limit) = self.limit {
            books.truncate(limit);
        }

        books
    }
}

/// Parse a book id taken from the query string
pub fn parse_id(raw: Option<&str>) -> AppResult<i64> {
    raw.unwrap_or_default()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest("invalid id parameter".to_string()))
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List books with optional title filter, id ordering and limit
    pub async fn list(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let options = ListOptions::from_query(query)?;
        let books = options.apply(self.repository.books_list().await);
        tracing::debug!(?options, count = books.len(), "Listed books");
        Ok(books)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await
    }

    /// Number of stored books
    pub async fn count(&self) -> usize {
        self.repository.books_count().await
    }

    pub async fn create(&self, input: BookInput) -> AppResult<Book> {
        let book = self.repository.books_create(input).await;
        tracing::info!(id = book.id, "Book created");
        Ok(book)
    }

    pub async fn create_many(&self, inputs: Vec<BookInput>) -> AppResult<Vec<Book>> {
        let books = self.repository.books_create_many(inputs).await;
        tracing::info!(count = books.len(), "Books created");
        Ok(books)
    }

    pub async fn update(&self, input: BookInput) -> AppResult<Book> {
        let book = self.repository.books_update(input).await?;
        tracing::info!(id = book.id, "Book updated");
        Ok(book)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.books_delete(id).await?;
        tracing::info!(id, "Book deleted");
        Ok(())
    }
}
