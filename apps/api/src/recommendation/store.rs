//! Storage collaborators for the recommendation endpoint.
//!
//! The handler only sees the traits; `AppState` carries them as `Arc<dyn …>` so tests can
//! swap in memory-backed fixtures without a database.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::listing::JobListingRow;
use crate::models::seeker::SeekerProfileRow;
use crate::recommendation::profile::{JobListing, SeekerProfile};

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Maps the identity provider's uid to the internal `users.id`.
    async fn resolve_user_id(&self, external_uid: &str) -> Result<Option<i64>, AppError>;

    /// `None` when the user exists but never finished profile setup.
    async fn fetch_seeker_profile(&self, user_id: i64) -> Result<Option<SeekerProfile>, AppError>;
}

#[async_trait]
pub trait ListingStore: Send + Sync {
    async fn fetch_active_listings(&self) -> Result<Vec<JobListing>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL
// ────────────────────────────────────────────────────────────────────────────

const ACTIVE_LISTINGS_SQL: &str = r#"
    SELECT
        jl.id, jl.title, jl.description, jl.short_description, jl.company_name_override,
        jl.location, jl.salary_min::float8 AS salary_min, jl.salary_max::float8 AS salary_max,
        jl.salary_currency, jl.salary_period, jl.job_type, jl.experience_level,
        jl.required_skills, jl.posted_at, jl.how_to_apply, jl.is_active,
        jpp.company_name AS provider_company_name,
        jpp.company_logo_url AS provider_company_logo_url
    FROM job_listings jl
    LEFT JOIN users u ON jl.provider_user_id = u.id
    LEFT JOIN job_provider_profiles jpp ON u.id = jpp.user_id
    WHERE jl.is_active = TRUE
"#;

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn resolve_user_id(&self, external_uid: &str) -> Result<Option<i64>, AppError> {
        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE firebase_uid = $1")
            .bind(external_uid)
            .fetch_optional(&self.db)
            .await?;
        Ok(id)
    }

    async fn fetch_seeker_profile(&self, user_id: i64) -> Result<Option<SeekerProfile>, AppError> {
        let row = sqlx::query_as::<_, SeekerProfileRow>(
            "SELECT user_id, skills, years_of_experience FROM job_seeker_profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row.map(SeekerProfile::from))
    }
}

#[async_trait]
impl ListingStore for PgStore {
    async fn fetch_active_listings(&self) -> Result<Vec<JobListing>, AppError> {
        let rows = sqlx::query_as::<_, JobListingRow>(ACTIVE_LISTINGS_SQL)
            .fetch_all(&self.db)
            .await?;
        Ok(rows.into_iter().map(JobListing::from).collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory fixtures
// ────────────────────────────────────────────────────────────────────────────
