//! Application (user ↔ job-ad) repository functions.

use sqlx::PgPool;

use crate::{models::UserJobAdRow, DbError};

/// Bare insert, no conflict clause: a duplicate `(user_id, job_ad_id)` pair
/// must fail the composite primary key, never be silently absorbed.
const INSERT_SQL: &str = "INSERT INTO user_job_ads (user_id, job_ad_id)
     VALUES ($1, $2)
     RETURNING user_id, job_ad_id, created_at, updated_at";

/// Insert an application row. Duplicate pairs surface as a database error.
pub async fn create(pool: &PgPool, user_id: i32, job_ad_id: i32) -> Result<UserJobAdRow, DbError> {
    let row = sqlx::query_as::<_, UserJobAdRow>(INSERT_SQL)
        .bind(user_id)
        .bind(job_ad_id)
        .fetch_one(pool)
        .await?;

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_applications_are_rejected_not_absorbed() {
        // No ON CONFLICT clause of any kind: the second identical submission
        // has to violate the (user_id, job_ad_id) primary key and error out.
        assert!(!INSERT_SQL.contains("ON CONFLICT"));
        assert!(INSERT_SQL.starts_with("INSERT INTO user_job_ads"));
    }
}
