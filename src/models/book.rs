use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::traits::{Entity, EntityPayload, PgQuery};
use crate::validation::FieldRule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookData {
    pub title: String,
    pub author: String,
}

impl Entity for Book {
    type Payload = BookData;

    const NAME: &'static str = "Book";
    const LABEL: &'static str = "book";
    const TABLE_NAME: &'static str = "books";
    const COLUMNS: &'static [&'static str] = &["title", "author"];
}

impl EntityPayload for BookData {
    const RULES: &'static [FieldRule] = &[
        FieldRule::new("title", "Title", 50),
        FieldRule::new("author", "Author", 50),
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query.bind(self.title.as_str()).bind(self.author.as_str())
    }
}
