//! Movie-info CRUD operations.

use rusqlite::{Connection, OptionalExtension};
use sn_core::{Error, MovieInfo, MovieInfoId, Result};

use crate::models::{movie_info_from_row, MOVIE_INFO_COLUMNS};

/// Save a batch of records in one transaction.
///
/// Records without an id are inserted and get a fresh one; records with an
/// id replace the stored row (or create it under that id). The returned
/// records are in input order with every id filled in.
pub fn save_all(conn: &Connection, records: &[MovieInfo]) -> Result<Vec<MovieInfo>> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| Error::database(e.to_string()))?;

    let mut saved = Vec::with_capacity(records.len());
    for record in records {
        let id = match record.id {
            Some(id) => {
                tx.execute(
                    "INSERT INTO movie_info (id, name, description, path)
                     VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET
                         name = excluded.name,
                         description = excluded.description,
                         path = excluded.path",
                    rusqlite::params![id.get(), record.name, record.description, record.path],
                )
                .map_err(|e| Error::database(e.to_string()))?;
                id
            }
            None => {
                tx.execute(
                    "INSERT INTO movie_info (name, description, path) VALUES (?1, ?2, ?3)",
                    rusqlite::params![record.name, record.description, record.path],
                )
                .map_err(|e| Error::database(e.to_string()))?;
                MovieInfoId::from(tx.last_insert_rowid())
            }
        };

        saved.push(MovieInfo {
            id: Some(id),
            ..record.clone()
        });
    }

    tx.commit().map_err(|e| Error::database(e.to_string()))?;
    Ok(saved)
}

/// List all records ordered by id.
pub fn list_movie_infos(conn: &Connection) -> Result<Vec<MovieInfo>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {MOVIE_INFO_COLUMNS} FROM movie_info ORDER BY id"
        ))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], movie_info_from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Get a record by id.
pub fn get_movie_info(conn: &Connection, id: MovieInfoId) -> Result<Option<MovieInfo>> {
    conn.query_row(
        &format!("SELECT {MOVIE_INFO_COLUMNS} FROM movie_info WHERE id = ?1"),
        [id.get()],
        movie_info_from_row,
    )
    .optional()
    .map_err(|e| Error::database(e.to_string()))
}

/// Get only the stored file path for a record.
pub fn find_path_by_id(conn: &Connection, id: MovieInfoId) -> Result<Option<String>> {
    conn.query_row(
        "SELECT path FROM movie_info WHERE id = ?1",
        [id.get()],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| Error::database(e.to_string()))
}
