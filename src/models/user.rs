use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::book::Book;
use super::traits::{Entity, EntityPayload, PgQuery};
use crate::validation::FieldRule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub username: String,
    pub email: String,
}

/// A user together with every book linked through `user_books`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithBooks {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub books: Vec<Book>,
}

impl Entity for User {
    type Payload = UserData;

    const NAME: &'static str = "User";
    const LABEL: &'static str = "user";
    const TABLE_NAME: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["username", "email"];
}

impl EntityPayload for UserData {
    const RULES: &'static [FieldRule] = &[
        FieldRule::new("username", "Username", 50),
        FieldRule::new("email", "Email", 100),
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query.bind(self.username.as_str()).bind(self.email.as_str())
    }
}
