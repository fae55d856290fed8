//! Substring search across companies and job ads.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use db::query::{self, JobAdRecord, QueryIntent};
use db::repository::companies;

use super::AppState;
use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Company-path hits first, then field-path hits. An ad that matches both
/// paths appears twice; the union is intentionally not deduplicated.
fn combine_results(
    from_companies: Vec<JobAdRecord>,
    from_fields: Vec<JobAdRecord>,
) -> Vec<JobAdRecord> {
    let mut results = from_companies;
    results.extend(from_fields);
    results
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<JobAdRecord>>, ApiError> {
    let term = match params.q.as_deref() {
        Some(q) if !q.is_empty() => q.to_string(),
        _ => return Err(ApiError::bad_request("q parameter is required")),
    };

    let matched = match companies::search(&state.pool, &term).await {
        Ok(matched) => matched,
        Err(e) => return Err(ApiError::internal(e)),
    };
    let company_ids: Vec<i32> = matched.iter().map(|company| company.id).collect();

    let from_companies = match query::fetch_job_ads(
        &state.pool,
        &QueryIntent::SearchByCompany { company_ids }.options(),
    )
    .await
    {
        Ok(fetched) => fetched.into_records(),
        Err(e) => return Err(ApiError::internal(e)),
    };

    let from_fields = match query::fetch_job_ads(
        &state.pool,
        &QueryIntent::SearchByFields { term }.options(),
    )
    .await
    {
        Ok(fetched) => fetched.into_records(),
        Err(e) => return Err(ApiError::internal(e)),
    };

    Ok(Json(combine_results(from_companies, from_fields)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::query::CompanySummary;

    fn record(id: i32) -> JobAdRecord {
        JobAdRecord {
            id,
            position: "Backend Engineer".into(),
            reward: 500000,
            skills: "rust".into(),
            content: None,
            company: CompanySummary {
                name: "Acme".into(),
                location: "Seoul".into(),
                country: "Korea".into(),
            },
        }
    }

    #[test]
    fn union_keeps_company_hits_first_and_preserves_duplicates() {
        // Ad 2 matches through its company and through its own fields; it
        // must appear in both positions rather than be deduplicated.
        let results = combine_results(vec![record(1), record(2)], vec![record(2), record(5)]);

        let ids: Vec<i32> = results.iter().map(|ad| ad.id).collect();
        assert_eq!(ids, vec![1, 2, 2, 5]);
    }

    #[test]
    fn union_of_empty_paths_is_empty() {
        assert!(combine_results(Vec::new(), Vec::new()).is_empty());
    }
}
