//! Typed scoring inputs. Storage rows are parsed into these once, at the boundary,
//! so the engine never sees free text.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::listing::JobListingRow;
use crate::models::seeker::SeekerProfileRow;
use crate::recommendation::experience::ExperienceLevel;
use crate::recommendation::skills::{parse_skill_set, parse_years_of_experience};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekerProfile {
    pub skills: BTreeSet<String>,
    pub years_of_experience: u32,
}

/// Fields that travel with a listing but never affect its score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingDetails {
    pub title: String,
    pub description: String,
    pub short_description: Option<String>,
    pub company_name_override: Option<String>,
    pub provider_company_name: Option<String>,
    pub provider_company_logo_url: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    pub salary_period: Option<String>,
    /// Skills text as the employer typed it.
    pub skills_text: Option<String>,
    pub how_to_apply: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: i64,
    pub required_skills: BTreeSet<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub is_active: bool,
    pub posted_at: DateTime<Utc>,
    pub details: ListingDetails,
}

impl JobListing {
    /// Experience rank used for alignment; 0 when the listing is unranked.
    pub fn level_rank(&self) -> u32 {
        self.experience_level.map(ExperienceLevel::rank).unwrap_or(0)
    }
}

impl From<SeekerProfileRow> for SeekerProfile {
    fn from(row: SeekerProfileRow) -> Self {
        Self {
            skills: parse_skill_set(row.skills.as_deref()),
            years_of_experience: parse_years_of_experience(row.years_of_experience.as_deref()),
        }
    }
}

impl From<JobListingRow> for JobListing {
    fn from(row: JobListingRow) -> Self {
        Self {
            id: row.id,
            required_skills: parse_skill_set(row.required_skills.as_deref()),
            experience_level: row
                .experience_level
                .as_deref()
                .and_then(ExperienceLevel::from_label),
            is_active: row.is_active,
            posted_at: row.posted_at,
            details: ListingDetails {
                title: row.title,
                description: row.description,
                short_description: row.short_description,
                company_name_override: row.company_name_override,
                provider_company_name: row.provider_company_name,
                provider_company_logo_url: row.provider_company_logo_url,
                location: row.location,
                job_type: row.job_type,
                salary_min: row.salary_min,
                salary_max: row.salary_max,
                salary_currency: row.salary_currency,
                salary_period: row.salary_period,
                skills_text: row.required_skills,
                how_to_apply: row.how_to_apply,
            },
        }
    }
}
