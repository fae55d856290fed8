//! Application submission handler (`POST /user-job-ad`).

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use db::models::UserJobAdRow;
use db::repository::{job_ads, user_job_ads, users};

use super::AppState;
use crate::error::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserJobAdDto {
    pub user_id: i32,
    pub job_ad_id: i32,
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserJobAdDto>,
) -> Result<(StatusCode, Json<UserJobAdRow>), ApiError> {
    let (user, _created) = match users::find_or_create(&state.pool, payload.user_id).await {
        Ok(found) => found,
        Err(e) => return Err(ApiError::internal(e)),
    };

    match job_ads::find_by_id(&state.pool, payload.job_ad_id).await {
        Ok(Some(_)) => {}
        // A missing ad is rejected with 400, not 404.
        Ok(None) => return Err(ApiError::bad_request("JobAd not found")),
        Err(e) => return Err(ApiError::internal(e)),
    }

    // A duplicate (userId, jobAdId) pair fails the composite primary key and
    // lands in the internal branch.
    match user_job_ads::create(&state.pool, user.id, payload.job_ad_id).await {
        Ok(row) => Ok((StatusCode::CREATED, Json(row))),
        Err(e) => Err(ApiError::internal(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_deserializes_camel_case_body() {
        let dto: CreateUserJobAdDto =
            serde_json::from_str(r#"{"userId":11,"jobAdId":42}"#).unwrap();
        assert_eq!(dto.user_id, 11);
        assert_eq!(dto.job_ad_id, 42);
    }
}
