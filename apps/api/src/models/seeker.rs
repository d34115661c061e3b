use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw `job_seeker_profiles` row as stored by the profile pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct SeekerProfileRow {
    pub user_id: i64,
    /// Comma-separated free text, e.g. `"React, Node.js"`.
    pub skills: Option<String>,
    /// Free text, e.g. `"5-7 years"`.
    pub years_of_experience: Option<String>,
}
