//! Company repository functions.

use sqlx::PgPool;

use crate::{models::CompanyRow, DbError};

/// Insert-if-absent step of `find_or_create`. `ON CONFLICT DO NOTHING`
/// guarantees an existing row is never rewritten with the caller's defaults.
const INSERT_IF_ABSENT_SQL: &str = "INSERT INTO companies (id, name, location, country)
     VALUES ($1, $2, $3, $4)
     ON CONFLICT (id) DO NOTHING
     RETURNING id, name, location, country";

const SELECT_BY_ID_SQL: &str =
    "SELECT id, name, location, country FROM companies WHERE id = $1";

const SEARCH_SQL: &str = "SELECT id, name, location, country FROM companies
     WHERE name LIKE $1 OR location LIKE $1 OR country LIKE $1";

/// Field values applied only when `find_or_create` has to insert.
#[derive(Debug, Clone)]
pub struct CompanyDefaults {
    pub name: String,
    pub location: String,
    pub country: String,
}

/// Return the company with the given id, creating it from `defaults` when it
/// does not exist yet. The boolean reports whether an insert happened. An
/// existing row is returned untouched; the defaults are ignored.
pub async fn find_or_create(
    pool: &PgPool,
    id: i32,
    defaults: &CompanyDefaults,
) -> Result<(CompanyRow, bool), DbError> {
    let inserted = sqlx::query_as::<_, CompanyRow>(INSERT_IF_ABSENT_SQL)
        .bind(id)
        .bind(&defaults.name)
        .bind(&defaults.location)
        .bind(&defaults.country)
        .fetch_optional(pool)
        .await?;

    if let Some(company) = inserted {
        return Ok((company, true));
    }

    let existing = sqlx::query_as::<_, CompanyRow>(SELECT_BY_ID_SQL)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound)?;

    Ok((existing, false))
}

/// Companies whose name, location, or country contains `term` as a
/// substring. Case sensitivity follows the database collation.
pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<CompanyRow>, DbError> {
    let pattern = format!("%{term}%");
    let rows = sqlx::query_as::<_, CompanyRow>(SEARCH_SQL)
        .bind(&pattern)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}
