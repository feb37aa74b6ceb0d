pub mod book;
pub mod student;
pub mod traits;
pub mod user;

pub use book::{Book, BookData};
pub use student::{Student, StudentData};
pub use traits::{Entity, EntityPayload, PgQuery};
pub use user::{User, UserData, UserWithBooks};
