//! Book model

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Identifier assigned by the store
    pub id: i64,
    pub title: String,
    pub authors: Vec<String>,
    /// Publication year
    pub year: i64,
}

/// Book payload accepted by create and update requests.
///
/// Absent or `null` fields fall back to their zero value; `id` is ignored on
/// create and selects the target record on update.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct BookInput {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub year: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl BookInput {
    /// Turn the payload into a stored record carrying `id`
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            authors: self.authors,
            year: self.year,
        }
    }
}

/// Query parameters selecting a single book
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookIdQuery {
    /// Book ID
    pub id: Option<String>,
}

/// Query parameters for the book list
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Maximum number of books to return
    pub limit: Option<String>,
    /// Case-sensitive substring the title must contain
    pub title: Option<String>,
    /// `asc` or `desc` by id; anything else keeps store order
    pub sort: Option<String>,
}

/// Ordering applied to the book list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Sample catalog loaded at startup
pub fn seed_books() -> Vec<Book> {
    fn book(id: i64, title: &str, authors: &[&str], year: i64) -> Book {
        Book {
            id,
            title: title.to_string(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            year,
        }
    }

    vec![
        book(1, "Go на практике", &["Мэтт Батчер", "Мэтт Фарина"], 2016),
        book(2, "Чистый код", &["Роберт Мартин"], 2019),
        book(3, "Алгоритмы", &["Томас Кормен", "Чарльз Эрик Лейзерсон"], 1989),
        book(4, "Чистая архитектура", &["Роберт Мартин"], 2018),
    ]
}
