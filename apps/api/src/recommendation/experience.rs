use std::fmt;

use serde::{Deserialize, Serialize};

/// Seniority tier attached to a job listing. Ordered from most junior to most senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Entry-level")]
    EntryLevel,
    #[serde(rename = "Mid-level")]
    MidLevel,
    #[serde(rename = "Senior-level")]
    SeniorLevel,
    Lead,
    Manager,
    Executive,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 6] = [
        ExperienceLevel::EntryLevel,
        ExperienceLevel::MidLevel,
        ExperienceLevel::SeniorLevel,
        ExperienceLevel::Lead,
        ExperienceLevel::Manager,
        ExperienceLevel::Executive,
    ];

    /// Coarse rank used by experience alignment: Entry-level=1 … Executive=6.
    pub fn rank(self) -> u32 {
        match self {
            ExperienceLevel::EntryLevel => 1,
            ExperienceLevel::MidLevel => 2,
            ExperienceLevel::SeniorLevel => 3,
            ExperienceLevel::Lead => 4,
            ExperienceLevel::Manager => 5,
            ExperienceLevel::Executive => 6,
        }
    }

    /// The label as stored in `job_listings.experience_level`.
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::EntryLevel => "Entry-level",
            ExperienceLevel::MidLevel => "Mid-level",
            ExperienceLevel::SeniorLevel => "Senior-level",
            ExperienceLevel::Lead => "Lead",
            ExperienceLevel::Manager => "Manager",
            ExperienceLevel::Executive => "Executive",
        }
    }

    /// Parses a stored label. Unknown text yields `None` so the listing is treated as unranked.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
