//! Converts ranked listings into the job JSON the dashboard consumes.

use std::sync::LazyLock;

use chrono::SecondsFormat;
use regex::Regex;
use serde::Serialize;

use crate::recommendation::engine::ScoredJob;
use crate::recommendation::experience::ExperienceLevel;
use crate::recommendation::profile::{JobListing, ListingDetails};
use crate::recommendation::skills::split_display_skills;

const SHORT_DESCRIPTION_CHARS: usize = 150;
const DEFAULT_CURRENCY: &str = "INR";
const UNKNOWN_COMPANY: &str = "N/A";

static APPLY_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://[^\s]+").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiJob {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub short_description: String,
    pub description: String,
    pub job_type: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub posted_date: String,
    pub salary: Option<String>,
    pub skills: Vec<String>,
    pub company_logo_url: Option<String>,
    pub apply_url: Option<String>,
    pub score: u32,
}

pub fn present(job: &ScoredJob<'_>) -> ApiJob {
    present_listing(job.listing, job.score)
}

pub fn present_listing(listing: &JobListing, score: u32) -> ApiJob {
    let d = &listing.details;
    ApiJob {
        id: listing.id.to_string(),
        title: d.title.clone(),
        company: company_name(d),
        location: d.location.clone(),
        short_description: short_description(d),
        description: d.description.clone(),
        job_type: d.job_type.clone(),
        experience_level: listing.experience_level,
        posted_date: listing.posted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        salary: format_salary(
            d.salary_min,
            d.salary_max,
            d.salary_currency.as_deref(),
            d.salary_period.as_deref(),
        ),
        skills: split_display_skills(d.skills_text.as_deref()),
        company_logo_url: d.provider_company_logo_url.clone(),
        apply_url: d
            .how_to_apply
            .as_deref()
            .map(|text| extract_apply_url(text).unwrap_or(text).to_string()),
        score,
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Listing override, then the provider's profile name, then "N/A".
fn company_name(d: &ListingDetails) -> String {
    non_empty(&d.company_name_override)
        .or_else(|| non_empty(&d.provider_company_name))
        .unwrap_or(UNKNOWN_COMPANY)
        .to_string()
}

fn short_description(d: &ListingDetails) -> String {
    if let Some(short) = non_empty(&d.short_description) {
        return short.to_string();
    }
    let mut chars = d.description.chars();
    let head: String = chars.by_ref().take(SHORT_DESCRIPTION_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// First http(s) URL in the how-to-apply text.
pub fn extract_apply_url(how_to_apply: &str) -> Option<&str> {
    APPLY_URL.find(how_to_apply).map(|m| m.as_str())
}

/// `"INR 50,000 - 80,000 per monthly"`, or a single amount when only one bound is known
/// or both are equal.
pub fn format_salary(
    min: Option<f64>,
    max: Option<f64>,
    currency: Option<&str>,
    period: Option<&str>,
) -> Option<String> {
    let currency = currency.filter(|c| !c.is_empty()).unwrap_or(DEFAULT_CURRENCY);
    let period = period
        .filter(|p| !p.is_empty())
        .map(|p| format!(" per {p}"))
        .unwrap_or_default();

    let amount = match (min, max) {
        (None, None) => return None,
        (Some(lo), Some(hi)) if lo == hi => format_amount(lo),
        (Some(lo), Some(hi)) => format!("{} - {}", format_amount(lo), format_amount(hi)),
        (Some(v), None) | (None, Some(v)) => format_amount(v),
    };
    Some(format!("{currency} {amount}{period}"))
}

/// Thousands-grouped with at most three fractional digits: 1234567.5 → "1,234,567.5".
/// Amounts beyond what fits in milli-units fall back to plain `f64` display.
fn format_amount(value: f64) -> String {
    let scaled = (value.abs() * 1000.0).round();
    if !scaled.is_finite() || scaled >= u64::MAX as f64 {
        return value.to_string();
    }
    let millis = scaled as u64;
    let sign = if value < 0.0 && millis > 0 { "-" } else { "" };
    let whole = group_thousands(millis / 1000);
    let fraction = format!("{:03}", millis % 1000);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
