use sqlx::FromRow;
use std::collections::HashMap;

use super::Repository;
use crate::error::Result;
use crate::models::{Book, User, UserWithBooks};

/// One row of the users ⟕ user_books ⟕ books join.
#[derive(Debug, Clone, FromRow)]
pub struct UserBookRow {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub book_id: Option<i32>,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Repository<User> {
    /// Case-insensitive substring match on username or email.
    pub async fn search(&self, term: &str) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email
            FROM users
            WHERE username ILIKE $1 OR email ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(like_pattern(term))
        .fetch_all(self.pool())
        .await?;

        tracing::debug!(term, count = users.len(), "Searched users");
        Ok(users)
    }

    /// Every user with the books linked to them, ordered by user id.
    pub async fn list_with_books(&self) -> Result<Vec<UserWithBooks>> {
        let rows = sqlx::query_as::<_, UserBookRow>(
            r#"
            SELECT u.id AS user_id, u.username, u.email,
                   b.id AS book_id, b.title, b.author
            FROM users u
            LEFT JOIN user_books ub ON ub.user_id = u.id
            LEFT JOIN books b ON b.id = ub.book_id
            ORDER BY u.id, b.id
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(group_user_books(rows))
    }
}

/// Wrap a search term for ILIKE, escaping its own wildcards so they match literally.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Fold joined rows into one entry per user, keeping first-seen order.
/// Rows without a book (from the outer join) only contribute the user.
pub fn group_user_books(rows: Vec<UserBookRow>) -> Vec<UserWithBooks> {
    let mut users: Vec<UserWithBooks> = Vec::new();
    let mut positions: HashMap<i32, usize> = HashMap::new();

    for row in rows {
        let index = *positions.entry(row.user_id).or_insert_with(|| {
            users.push(UserWithBooks {
                id: row.user_id,
                username: row.username.clone(),
                email: row.email.clone(),
                books: Vec::new(),
            });
            users.len() - 1
        });

        if let Some(book_id) = row.book_id {
            users[index].books.push(Book {
                id: book_id,
                title: row.title.unwrap_or_default(),
                author: row.author.unwrap_or_default(),
            });
        }
    }

    users
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(user_id: i32, book: Option<(i32, &str, &str)>) -> UserBookRow {
        UserBookRow {
            user_id,
            username: format!("user{}", user_id),
            email: format!("user{}@example.com", user_id),
            book_id: book.map(|b| b.0),
            title: book.map(|b| b.1.to_string()),
            author: book.map(|b| b.2.to_string()),
        }
    }

    #[test]
    fn test_like_pattern() {
        assert_eq!(like_pattern("ann"), "%ann%");
        assert_eq!(like_pattern(""), "%%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn test_grouping_keeps_book_less_users() {
        let rows = vec![
            row(1, Some((10, "Dune", "Herbert"))),
            row(1, Some((11, "Emma", "Austen"))),
            row(2, None),
        ];

        let users = group_user_books(rows);
        assert_eq!(users.len(), 2);

        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].books.len(), 2);
        assert_eq!(users[0].books[0].title, "Dune");
        assert_eq!(users[0].books[1].author, "Austen");

        assert_eq!(users[1].id, 2);
        assert!(users[1].books.is_empty());
    }

    #[test]
    fn test_grouping_non_adjacent_rows() {
        let rows = vec![
            row(3, Some((1, "A", "X"))),
            row(4, None),
            row(3, Some((2, "B", "Y"))),
        ];

        let users = group_user_books(rows);
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 3);
        assert_eq!(users[0].books.len(), 2);
        assert_eq!(users[1].id, 4);
    }

    #[test]
    fn test_grouping_empty() {
        assert!(group_user_books(Vec::new()).is_empty());
    }

    #[test]
    fn test_with_books_serializes_empty_array() {
        let users = group_user_books(vec![row(7, None)]);
        let json = serde_json::to_value(&users).unwrap();
        assert_eq!(json[0]["books"], serde_json::json!([]));
        assert_eq!(json[0]["username"], "user7");
    }
}
