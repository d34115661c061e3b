use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw active-listing row joined with the provider's company profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobListingRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub short_description: Option<String>,
    pub company_name_override: Option<String>,
    pub location: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    pub salary_period: Option<String>,
    pub job_type: Option<String>,
    pub experience_level: Option<String>,
    /// Comma-separated free text.
    pub required_skills: Option<String>,
    pub posted_at: DateTime<Utc>,
    pub how_to_apply: Option<String>,
    pub is_active: bool,
    pub provider_company_name: Option<String>,
    pub provider_company_logo_url: Option<String>,
}
