//! Data models for Bookery

pub mod book;
pub mod category;
pub mod genre;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookPayload};
pub use category::{Category, CategoryPayload};
pub use genre::{Genre, GenreDetails, GenrePayload};
pub use user::User;
