//! Database query modules.

pub mod movie_info;
