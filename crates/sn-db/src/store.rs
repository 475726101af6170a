//! Record store abstraction for the catalog.
//!
//! Handlers receive an `Arc<dyn MovieInfoStore>` at construction time, so
//! tests and alternative backends can swap the SQLite implementation out.

use sn_core::{MovieInfo, MovieInfoId, Result};

use crate::pool::{get_conn, DbPool};
use crate::queries::movie_info;

/// Persistence operations the catalog service needs.
pub trait MovieInfoStore: Send + Sync {
    /// Insert or update every record; returns them with ids assigned.
    fn save_all(&self, records: &[MovieInfo]) -> Result<Vec<MovieInfo>>;

    /// Every stored record, ordered by id.
    fn find_all(&self) -> Result<Vec<MovieInfo>>;

    /// A single record, if one exists under `id`.
    fn find_by_id(&self, id: MovieInfoId) -> Result<Option<MovieInfo>>;

    /// The stored file path for `id`.
    fn find_path_by_id(&self, id: MovieInfoId) -> Result<Option<String>> {
        Ok(self.find_by_id(id)?.map(|m| m.path))
    }
}

/// [`MovieInfoStore`] backed by the r2d2 SQLite pool.
#[derive(Clone)]
pub struct SqliteMovieInfoStore {
    pool: DbPool,
}

impl SqliteMovieInfoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl MovieInfoStore for SqliteMovieInfoStore {
    fn save_all(&self, records: &[MovieInfo]) -> Result<Vec<MovieInfo>> {
        let conn = get_conn(&self.pool)?;
        movie_info::save_all(&conn, records)
    }

    fn find_all(&self) -> Result<Vec<MovieInfo>> {
        let conn = get_conn(&self.pool)?;
        movie_info::list_movie_infos(&conn)
    }

    fn find_by_id(&self, id: MovieInfoId) -> Result<Option<MovieInfo>> {
        let conn = get_conn(&self.pool)?;
        movie_info::get_movie_info(&conn, id)
    }

    fn find_path_by_id(&self, id: MovieInfoId) -> Result<Option<String>> {
        let conn = get_conn(&self.pool)?;
        movie_info::find_path_by_id(&conn, id)
    }
}
