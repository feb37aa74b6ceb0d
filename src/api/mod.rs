pub mod handlers;
pub mod routes;

pub use routes::{app, book_routes, health_routes, student_routes, user_routes};
