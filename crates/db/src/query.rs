//! Shared query shaping for job-ad reads.
//!
//! Three read paths (list, detail, search) share one projection and join
//! recipe over `job_ads`; only the extra columns and the filter vary per
//! call site. Each call site is a [`QueryIntent`] that lowers to the same
//! [`JobAdQueryOptions`] descriptor, which this module renders and executes
//! as a single SQL statement.

use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Postgres, QueryBuilder, Row};

use crate::{DbError, DbPool};

/// Base attribute set selected on every job-ad read.
const BASE_ATTRIBUTES: [&str; 4] = ["id", "position", "reward", "skills"];

/// Columns of `job_ads` that can appear as extra projection attributes or in
/// substring filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobAdColumn {
    Position,
    Reward,
    Skills,
    Content,
}

impl JobAdColumn {
    pub fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Reward => "reward",
            Self::Skills => "skills",
            Self::Content => "content",
        }
    }
}

/// Filter expression over job ads.
#[derive(Debug, Clone, PartialEq)]
pub enum JobAdFilter {
    /// Direct equality on the primary key.
    IdEq(i32),
    /// Set membership over the owning company.
    CompanyIdIn(Vec<i32>),
    /// Substring match on a single column.
    Contains(JobAdColumn, String),
    /// Boolean OR over sub-filters.
    Or(Vec<JobAdFilter>),
}

/// The shared query descriptor consumed by [`fetch_job_ads`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobAdQueryOptions {
    pub additional_attributes: Vec<JobAdColumn>,
    pub filter: Option<JobAdFilter>,
}

impl JobAdQueryOptions {
    /// Single-record mode is chosen only when the filter is a direct `id`
    /// equality at the top level. An `Or` combinator that happens to contain
    /// an `IdEq` still runs as a multi-record fetch; nested expressions are
    /// deliberately not inspected.
    pub fn single_record(&self) -> bool {
        matches!(self.filter, Some(JobAdFilter::IdEq(_)))
    }
}

/// The read paths that share the job-ad query recipe.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryIntent {
    /// `GET /jobad` — every ad, summary attributes only.
    List,
    /// `GET /jobad/:id` — one ad including its body text.
    Detail { id: i32 },
    /// Search, company path — ads owned by companies already matched by
    /// name, location, or country.
    SearchByCompany { company_ids: Vec<i32> },
    /// Search, field path — ads whose own fields contain the term.
    SearchByFields { term: String },
}

impl QueryIntent {
    /// Lower the intent to the shared descriptor.
    pub fn options(self) -> JobAdQueryOptions {
        match self {
            Self::List => JobAdQueryOptions::default(),
            Self::Detail { id } => JobAdQueryOptions {
                additional_attributes: vec![JobAdColumn::Content],
                filter: Some(JobAdFilter::IdEq(id)),
            },
            Self::SearchByCompany { company_ids } => JobAdQueryOptions {
                additional_attributes: Vec::new(),
                filter: Some(JobAdFilter::CompanyIdIn(company_ids)),
            },
            Self::SearchByFields { term } => JobAdQueryOptions {
                additional_attributes: Vec::new(),
                filter: Some(JobAdFilter::Or(vec![
                    JobAdFilter::Contains(JobAdColumn::Position, term.clone()),
                    JobAdFilter::Contains(JobAdColumn::Reward, term.clone()),
                    JobAdFilter::Contains(JobAdColumn::Skills, term.clone()),
                    JobAdFilter::Contains(JobAdColumn::Content, term),
                ])),
            },
        }
    }
}

/// Projected company attributes embedded in every job-ad read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySummary {
    pub name: String,
    pub location: String,
    pub country: String,
}

/// One row of the shared job-ad projection: base attributes, any requested
/// extra columns, and the joined company summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobAdRecord {
    pub id: i32,
    pub position: String,
    pub reward: i32,
    pub skills: String,
    /// Present only when the caller asked for it (detail reads).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "Company")]
    pub company: CompanySummary,
}

impl FromRow<'_, PgRow> for JobAdRecord {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        // `content` is only part of the projection for detail reads.
        let content = match row.try_get::<Option<String>, _>("content") {
            Ok(content) => content,
            Err(sqlx::Error::ColumnNotFound(_)) => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            id: row.try_get("id")?,
            position: row.try_get("position")?,
            reward: row.try_get("reward")?,
            skills: row.try_get("skills")?,
            content,
            company: CompanySummary {
                name: row.try_get("name")?,
                location: row.try_get("location")?,
                country: row.try_get("country")?,
            },
        })
    }
}

/// Result of a shaped fetch: one record (detail reads) or an ordered
/// sequence (list and search reads).
#[derive(Debug, Clone, PartialEq)]
pub enum JobAdFetch {
    One(Option<JobAdRecord>),
    Many(Vec<JobAdRecord>),
}

impl JobAdFetch {
    /// The single record, if the fetch ran in single-record mode and found
    /// one.
    pub fn into_record(self) -> Option<JobAdRecord> {
        match self {
            Self::One(record) => record,
            Self::Many(_) => None,
        }
    }

    /// All fetched records as a sequence.
    pub fn into_records(self) -> Vec<JobAdRecord> {
        match self {
            Self::Many(records) => records,
            Self::One(record) => record.into_iter().collect(),
        }
    }
}

fn push_filter(builder: &mut QueryBuilder<'static, Postgres>, filter: &JobAdFilter) {
    match filter {
        JobAdFilter::IdEq(id) => {
            builder.push("j.id = ");
            builder.push_bind(*id);
        }
        JobAdFilter::CompanyIdIn(ids) => {
            builder.push("j.company_id = ANY(");
            builder.push_bind(ids.clone());
            builder.push(")");
        }
        JobAdFilter::Contains(column, term) => {
            // reward is an integer column; match against its text form.
            match column {
                JobAdColumn::Reward => builder.push("j.reward::text LIKE "),
                other => builder.push(format!("j.{} LIKE ", other.name())),
            };
            builder.push_bind(format!("%{term}%"));
        }
        JobAdFilter::Or(parts) => {
            builder.push("(");
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    builder.push(" OR ");
                }
                push_filter(builder, part);
            }
            builder.push(")");
        }
    }
}

fn build_query(options: &JobAdQueryOptions) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT ");

    for (i, attr) in BASE_ATTRIBUTES.iter().enumerate() {
        if i > 0 {
            builder.push(", ");
        }
        builder.push(format!("j.{attr}"));
    }
    for attr in &options.additional_attributes {
        builder.push(format!(", j.{}", attr.name()));
    }
    builder.push(", c.name, c.location, c.country");
    builder.push(" FROM job_ads j INNER JOIN companies c ON c.id = j.company_id");

    if let Some(filter) = &options.filter {
        builder.push(" WHERE ");
        push_filter(&mut builder, filter);
    }

    builder
}

/// Run the shaped query: exactly one read round-trip, no mutation.
///
/// A top-level `IdEq` filter yields [`JobAdFetch::One`]; every other
/// descriptor yields [`JobAdFetch::Many`].
pub async fn fetch_job_ads(
    pool: &DbPool,
    options: &JobAdQueryOptions,
) -> Result<JobAdFetch, DbError> {
    let mut builder = build_query(options);
    let query = builder.build_query_as::<JobAdRecord>();

    if options.single_record() {
        Ok(JobAdFetch::One(query.fetch_optional(pool).await?))
    } else {
        Ok(JobAdFetch::Many(query.fetch_all(pool).await?))
    }
}
