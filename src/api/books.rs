//! Book endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::book::{Book, BookIdQuery, BookInput, BookQuery},
    services::books::parse_id,
};

use super::extract::{AppJson, AppQuery};

/// Get a single book
#[utoipa::path(
    get,
    path = "/book",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Invalid id", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    AppQuery(query): AppQuery<BookIdQuery>,
) -> AppResult<Json<Book>> {
    let id = parse_id(query.id.as_deref())?;
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Add a single book
#[utoipa::path(
    post,
    path = "/book",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 400, description = "Malformed body", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    AppJson(input): AppJson<BookInput>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.create(input).await?;
    Ok(Json(book))
}

/// Add several books at once
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Vec<BookInput>,
    responses(
        (status = 200, description = "Books created", body = Vec<Book>),
        (status = 400, description = "Malformed body", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_books(
    State(state): State<crate::AppState>,
    AppJson(inputs): AppJson<Vec<BookInput>>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.create_many(inputs).await?;
    Ok(Json(books))
}

/// List books with filtering, sorting and limit
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of books", body = Vec<Book>),
        (status = 400, description = "Invalid limit", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    AppQuery(query): AppQuery<BookQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list(&query).await?;
    Ok(Json(books))
}

/// Replace the book whose id matches the body's id
#[utoipa::path(
    put,
    path = "/book",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Malformed body", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AppJson(input): AppJson<BookInput>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(input).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/book",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Invalid id", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    AppQuery(query): AppQuery<BookIdQuery>,
) -> AppResult<StatusCode> {
    let id = parse_id(query.id.as_deref())?;
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
