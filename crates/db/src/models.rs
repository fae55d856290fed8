//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no behaviour. Wire names are
//! camelCase; column names stay snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// companies
// ---------------------------------------------------------------------------

/// An employer row. Ids are externally supplied, never generated here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyRow {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub country: String,
}

// ---------------------------------------------------------------------------
// job_ads
// ---------------------------------------------------------------------------

/// A persisted job posting row, owned by exactly one company.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobAdRow {
    pub id: i32,
    pub company_id: i32,
    pub position: String,
    pub reward: i32,
    pub content: String,
    pub skills: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// users
// ---------------------------------------------------------------------------

/// An applicant row. Carries nothing beyond the externally supplied id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// user_job_ads
// ---------------------------------------------------------------------------

/// One user's application to one job ad. Composite primary key
/// `(user_id, job_ad_id)`; rows are inserted but never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserJobAdRow {
    pub user_id: i32,
    pub job_ad_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn job_ad_row_serializes_camel_case() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let row = JobAdRow {
            id: 7,
            company_id: 3,
            position: "Backend Engineer".into(),
            reward: 500000,
            content: "We are hiring".into(),
            skills: "rust, sql".into(),
            created_at: at,
            updated_at: at,
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["companyId"], 3);
        assert!(value.get("company_id").is_none());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
    }

    #[test]
    fn user_job_ad_row_serializes_camel_case() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let row = UserJobAdRow {
            user_id: 11,
            job_ad_id: 42,
            created_at: at,
            updated_at: at,
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["userId"], 11);
        assert_eq!(value["jobAdId"], 42);
    }
}
