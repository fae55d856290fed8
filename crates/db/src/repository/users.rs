//! User repository functions.

use sqlx::PgPool;

use crate::{models::UserRow, DbError};

/// Insert-if-absent step of `find_or_create`; an existing row wins.
const INSERT_IF_ABSENT_SQL: &str = "INSERT INTO users (id)
     VALUES ($1)
     ON CONFLICT (id) DO NOTHING
     RETURNING id, created_at, updated_at";

const SELECT_BY_ID_SQL: &str = "SELECT id, created_at, updated_at FROM users WHERE id = $1";

/// Return the user with the given id, creating the row when it does not
/// exist yet. Users carry no fields beyond the externally supplied id, so
/// there are no defaults to apply. The boolean reports whether an insert
/// happened.
pub async fn find_or_create(pool: &PgPool, id: i32) -> Result<(UserRow, bool), DbError> {
    let inserted = sqlx::query_as::<_, UserRow>(INSERT_IF_ABSENT_SQL)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    if let Some(user) = inserted {
        return Ok((user, true));
    }

    let existing = sqlx::query_as::<_, UserRow>(SELECT_BY_ID_SQL)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound)?;

    Ok((existing, false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_or_create_never_rewrites_an_existing_user() {
        assert!(INSERT_IF_ABSENT_SQL.contains("ON CONFLICT (id) DO NOTHING"));
        assert!(!INSERT_IF_ABSENT_SQL.contains("DO UPDATE"));
    }
}
