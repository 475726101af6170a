//! Route handlers for the HTTP API.

pub mod catalog;
pub mod health;
pub mod stream;
