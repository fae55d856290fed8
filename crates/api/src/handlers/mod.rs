//! HTTP handlers, one module per resource.
//!
//! Handlers are stateless: each invocation is a single request/response
//! cycle, and every data-access call is awaited sequentially.

pub mod job_ads;
pub mod search;
pub mod user_job_ads;

use db::DbPool;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}
