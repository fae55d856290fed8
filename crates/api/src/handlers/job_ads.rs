//! Job-ad CRUD handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use db::models::JobAdRow;
use db::query::{self, JobAdRecord, QueryIntent};
use db::repository::companies::{self, CompanyDefaults};
use db::repository::job_ads::{self, JobAdChanges, NewJobAd};

use super::AppState;
use crate::error::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobAdDto {
    pub company_id: i32,
    pub position: String,
    pub reward: i32,
    pub content: String,
    pub skills: String,
    pub company_name: String,
    pub company_location: String,
    pub company_country: String,
}

/// Detail payload: the projected record plus the ids of the other ads owned
/// by the same company.
#[derive(Debug, Serialize)]
pub struct JobAdDetail {
    #[serde(flatten)]
    pub record: JobAdRecord,
    #[serde(rename = "OtherJobAdIds")]
    pub other_job_ad_ids: Vec<i32>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobAdRecord>>, ApiError> {
    match query::fetch_job_ads(&state.pool, &QueryIntent::List.options()).await {
        Ok(fetched) => Ok(Json(fetched.into_records())),
        Err(e) => Err(ApiError::internal(e)),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobAdDto>,
) -> Result<(StatusCode, Json<JobAdRow>), ApiError> {
    let defaults = CompanyDefaults {
        name: payload.company_name,
        location: payload.company_location,
        country: payload.company_country,
    };

    // Two independent writes, no transaction: a company created here is not
    // rolled back if the ad insert below fails.
    let (company, _created) =
        match companies::find_or_create(&state.pool, payload.company_id, &defaults).await {
            Ok(found) => found,
            Err(e) => return Err(ApiError::creation_failed(e)),
        };

    let new_ad = NewJobAd {
        company_id: company.id,
        position: payload.position,
        reward: payload.reward,
        content: payload.content,
        skills: payload.skills,
    };
    match job_ads::create(&state.pool, &new_ad).await {
        Ok(ad) => Ok((StatusCode::CREATED, Json(ad))),
        Err(e) => Err(ApiError::creation_failed(e)),
    }
}

pub async fn get(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<JobAdDetail>, ApiError> {
    let fetched = match query::fetch_job_ads(&state.pool, &QueryIntent::Detail { id }.options()).await
    {
        Ok(fetched) => fetched,
        Err(e) => return Err(ApiError::internal(e)),
    };

    let record = match fetched.into_record() {
        Some(record) => record,
        None => return Err(ApiError::not_found("No JobAd record found")),
    };

    let other_job_ad_ids = match job_ads::other_ad_ids(&state.pool, id).await {
        Ok(ids) => ids,
        Err(e) => return Err(ApiError::internal(e)),
    };

    Ok(Json(JobAdDetail {
        record,
        other_job_ad_ids,
    }))
}

pub async fn update(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(changes): Json<JobAdChanges>,
) -> Result<StatusCode, ApiError> {
    match job_ads::update(&state.pool, id, &changes).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(db::DbError::NotFound) => Err(ApiError::not_found("No record found to update")),
        Err(e) => Err(ApiError::internal(e)),
    }
}

pub async fn delete(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    match job_ads::delete(&state.pool, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(db::DbError::NotFound) => Err(ApiError::not_found("No record found to delete")),
        Err(e) => Err(ApiError::internal(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::query::CompanySummary;
    use serde_json::json;

    fn record(id: i32, content: Option<&str>) -> JobAdRecord {
        JobAdRecord {
            id,
            position: "Backend Engineer".into(),
            reward: 500000,
            skills: "rust, sql".into(),
            content: content.map(Into::into),
            company: CompanySummary {
                name: "Acme".into(),
                location: "Seoul".into(),
                country: "Korea".into(),
            },
        }
    }

    #[test]
    fn detail_payload_merges_record_fields_with_other_ad_ids() {
        let detail = JobAdDetail {
            record: record(3, Some("full body")),
            other_job_ad_ids: vec![4, 9],
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["content"], "full body");
        assert_eq!(value["OtherJobAdIds"], json!([4, 9]));
        assert_eq!(value["Company"]["name"], "Acme");
    }

    #[test]
    fn summary_serialization_omits_content() {
        let value = serde_json::to_value(record(1, None)).unwrap();
        assert!(value.get("content").is_none());
        assert_eq!(value["Company"]["country"], "Korea");
    }

    #[test]
    fn create_dto_deserializes_company_fields() {
        let dto: CreateJobAdDto = serde_json::from_value(json!({
            "companyId": 2,
            "position": "Data Engineer",
            "reward": 300000,
            "content": "body",
            "skills": "python",
            "companyName": "Globex",
            "companyLocation": "Busan",
            "companyCountry": "Korea"
        }))
        .unwrap();

        assert_eq!(dto.company_id, 2);
        assert_eq!(dto.company_name, "Globex");
    }
}
