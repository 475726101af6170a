//! Row mapping for database tables.
//!
//! The record types themselves live in `sn-core` so the HTTP layer and the
//! catalog client can share them; this module only knows how to build them
//! from a `rusqlite::Row`.

use sn_core::{MovieInfo, MovieInfoId};

/// Column list matching [`movie_info_from_row`].
pub const MOVIE_INFO_COLUMNS: &str = "id, name, description, path";

/// Build a [`MovieInfo`] from a row selected with [`MOVIE_INFO_COLUMNS`].
pub fn movie_info_from_row(row: &rusqlite::Row) -> rusqlite::Result<MovieInfo> {
    let id: i64 = row.get(0)?;
    Ok(MovieInfo {
        id: Some(MovieInfoId::from(id)),
        name: row.get(1)?,
        description: row.get(2)?,
        path: row.get(3)?,
    })
}
