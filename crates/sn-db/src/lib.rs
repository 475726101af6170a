//! sn-db: database access and persistence layer.
//!
//! This crate provides SQLite-backed storage with connection pooling,
//! embedded migrations, the `movie_info` queries, and the
//! [`MovieInfoStore`](store::MovieInfoStore) trait the catalog service is
//! built against.

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
pub mod store;

pub use store::{MovieInfoStore, SqliteMovieInfoStore};
