//! Job-ad repository functions.
//!
//! Reads that share the projection recipe (list, detail, search) live in
//! `crate::query`; this module holds the writes and the related-ids lookup.

use serde::Deserialize;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{models::JobAdRow, DbError};

/// Fields for a new posting. The company must already exist; callers resolve
/// it with `companies::find_or_create` first.
#[derive(Debug, Clone)]
pub struct NewJobAd {
    pub company_id: i32,
    pub position: String,
    pub reward: i32,
    pub content: String,
    pub skills: String,
}

/// Partial update payload; only the supplied fields change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobAdChanges {
    pub company_id: Option<i32>,
    pub position: Option<String>,
    pub reward: Option<i32>,
    pub content: Option<String>,
    pub skills: Option<String>,
}

pub async fn create(pool: &PgPool, ad: &NewJobAd) -> Result<JobAdRow, DbError> {
    let row = sqlx::query_as::<_, JobAdRow>(
        "INSERT INTO job_ads (company_id, position, reward, content, skills)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, company_id, position, reward, content, skills, created_at, updated_at",
    )
    .bind(ad.company_id)
    .bind(&ad.position)
    .bind(ad.reward)
    .bind(&ad.content)
    .bind(&ad.skills)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Apply a partial update to the ad with the given id. `updated_at` is
/// always touched. Errors with `DbError::NotFound` when no row matches;
/// field contents and `company_id` references are not validated.
pub async fn update(pool: &PgPool, id: i32, changes: &JobAdChanges) -> Result<(), DbError> {
    let mut builder =
        QueryBuilder::<Postgres>::new("UPDATE job_ads SET updated_at = now()");

    if let Some(company_id) = changes.company_id {
        builder.push(", company_id = ");
        builder.push_bind(company_id);
    }
    if let Some(position) = &changes.position {
        builder.push(", position = ");
        builder.push_bind(position.clone());
    }
    if let Some(reward) = changes.reward {
        builder.push(", reward = ");
        builder.push_bind(reward);
    }
    if let Some(content) = &changes.content {
        builder.push(", content = ");
        builder.push_bind(content.clone());
    }
    if let Some(skills) = &changes.skills {
        builder.push(", skills = ");
        builder.push_bind(skills.clone());
    }
    builder.push(" WHERE id = ");
    builder.push_bind(id);

    let result = builder.build().execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}

/// Permanently delete an ad by its primary key.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete(pool: &PgPool, id: i32) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM job_ads WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}

/// Fetch a single ad by its primary key (all columns, no join).
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<JobAdRow>, DbError> {
    let row = sqlx::query_as::<_, JobAdRow>(
        "SELECT id, company_id, position, reward, content, skills, created_at, updated_at
         FROM job_ads WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// The related-ads lookup: same company as the ad with `$1`, the ad itself
/// excluded.
const OTHER_AD_IDS_SQL: &str = "SELECT id FROM job_ads
     WHERE company_id = (SELECT company_id FROM job_ads WHERE id = $1)
       AND id <> $1";

/// Ids of the other ads owned by the same company as the ad with `id`,
/// excluding `id` itself.
pub async fn other_ad_ids(pool: &PgPool, id: i32) -> Result<Vec<i32>, DbError> {
    let ids = sqlx::query_scalar::<_, i32>(OTHER_AD_IDS_SQL)
        .bind(id)
        .fetch_all(pool)
        .await?;

    Ok(ids)
}
