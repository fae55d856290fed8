//! Repository functions — one function per database operation.
//!
//! Every function takes a `&PgPool` and returns a `Result<T, DbError>`.
//! No HTTP or response-shaping logic — pure SQL. Job-ad reads that share
//! the projection recipe go through `crate::query` instead.

pub mod companies;
pub mod job_ads;
pub mod user_job_ads;
pub mod users;
