//! Repository layer for database operations

pub mod books;
pub mod categories;
pub mod genres;
pub mod tokens;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub tokens: tokens::TokensRepository,
    pub categories: categories::CategoriesRepository,
    pub genres: genres::GenresRepository,
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            tokens: tokens::TokensRepository::new(pool.clone()),
            categories: categories::CategoriesRepository::new(pool.clone()),
            genres: genres::GenresRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            pool,
        }
    }
}
