//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, typed row structs, the shared job-ad query
//! shaper, and repository functions for every table in the job-board schema.
//! No HTTP concerns live here.

pub mod error;
pub mod models;
pub mod pool;
pub mod query;
pub mod repository;

pub use error::DbError;
pub use pool::DbPool;
