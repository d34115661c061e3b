//! Recommendation engine — ranks job listings for a seeker.
//!
//! Pure and synchronous: borrows both inputs read-only, performs no I/O, and never fails.
//! Malformed profile data has already been folded into neutral values by the adapter layer.

use serde::{Deserialize, Serialize};

use crate::recommendation::profile::{JobListing, SeekerProfile};

// ────────────────────────────────────────────────────────────────────────────
// Tunables
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Points per skill shared by the seeker and the listing.
    pub skill_match_points: u32,
    /// Seeker's years meet or exceed the listing's experience rank.
    pub experience_met_points: u32,
    /// Seeker is exactly one year short of the listing's experience rank.
    pub experience_near_points: u32,
    pub max_results: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_match_points: 10,
            experience_met_points: 5,
            experience_near_points: 2,
            max_results: 10,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// Per-signal contributions. The total is the plain sum of the fields, so a new
/// signal is one more field here plus one more term in `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub matched_skills: u32,
    pub skill_overlap: u32,
    pub experience_alignment: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.skill_overlap.saturating_add(self.experience_alignment)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredJob<'a> {
    pub listing: &'a JobListing,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Signals
// ────────────────────────────────────────────────────────────────────────────

/// Number of skill tokens the seeker and listing share (exact normalized equality).
pub fn count_matched_skills(seeker: &SeekerProfile, listing: &JobListing) -> u32 {
    let matched = seeker.skills.intersection(&listing.required_skills).count();
    u32::try_from(matched).unwrap_or(u32::MAX)
}

/// Coarse seniority alignment. Skipped entirely when either side is unknown (0).
pub fn experience_alignment_score(years: u32, job_level: u32, weights: &ScoringWeights) -> u32 {
    if job_level == 0 || years == 0 {
        return 0;
    }
    if years >= job_level {
        weights.experience_met_points
    } else if years == job_level - 1 {
        weights.experience_near_points
    } else {
        0
    }
}

/// Scores a single listing against the seeker.
pub fn score_listing(
    seeker: &SeekerProfile,
    listing: &JobListing,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let matched_skills = count_matched_skills(seeker, listing);
    ScoreBreakdown {
        matched_skills,
        skill_overlap: matched_skills.saturating_mul(weights.skill_match_points),
        experience_alignment: experience_alignment_score(
            seeker.years_of_experience,
            listing.level_rank(),
            weights,
        ),
    }
}

/// Ranks `listings` for `seeker`.
///
/// - listings scoring 0 are dropped
/// - order: score descending, then newest `posted_at`, then input order
/// - at most `weights.max_results` entries are returned
///
/// Inactive listings are scored like any other; filtering them is the listing store's job.
pub fn recommend<'a>(
    seeker: &SeekerProfile,
    listings: &'a [JobListing],
    weights: &ScoringWeights,
) -> Vec<ScoredJob<'a>> {
    let mut scored: Vec<ScoredJob<'a>> = listings
        .iter()
        .map(|listing| {
            let breakdown = score_listing(seeker, listing, weights);
            ScoredJob {
                listing,
                score: breakdown.total(),
                breakdown,
            }
        })
        .filter(|job| job.score > 0)
        .collect();

    // sort_by is stable, so equal (score, posted_at) pairs keep input order.
    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.listing.posted_at.cmp(&a.listing.posted_at))
    });
    scored.truncate(weights.max_results);
    scored
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::experience::ExperienceLevel;
    use crate::recommendation::profile::ListingDetails;
    use crate::recommendation::skills::parse_skill_set;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn tokens(skills: &[&str]) -> std::collections::BTreeSet<String> {
        skills.iter().map(|s| s.trim().to_lowercase()).collect()
    }

    fn seeker(skills: &[&str], years: u32) -> SeekerProfile {
        SeekerProfile {
            skills: tokens(skills),
            years_of_experience: years,
        }
    }

    fn listing(id: i64, skills: &[&str], level: Option<ExperienceLevel>) -> JobListing {
        JobListing {
            id,
            required_skills: tokens(skills),
            experience_level: level,
            is_active: true,
            posted_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            details: ListingDetails {
                title: format!("Job {id}"),
                ..ListingDetails::default()
            },
        }
    }

    fn ids(results: &[ScoredJob<'_>]) -> Vec<i64> {
        results.iter().map(|r| r.listing.id).collect()
    }

    #[test]
    fn test_one_skill_and_met_experience_scores_15() {
        let s = seeker(&["react", "node.js"], 3);
        let a = listing(1, &["React", "Python"], Some(ExperienceLevel::MidLevel));
        let breakdown = score_listing(&s, &a, &ScoringWeights::default());
        assert_eq!(breakdown.matched_skills, 1);
        assert_eq!(breakdown.total(), 15);
    }

    #[test]
    fn test_two_skills_at_senior_level_outranks_single_match() {
        let s = seeker(&["react", "node.js"], 3);
        let listings = vec![
            listing(1, &["React", "Python"], Some(ExperienceLevel::MidLevel)),
            listing(2, &["react", "node.js", "sql"], Some(ExperienceLevel::SeniorLevel)),
        ];
        let results = recommend(&s, &listings, &ScoringWeights::default());
        assert_eq!(ids(&results), vec![2, 1]);
        assert_eq!(results[0].score, 25);
        assert_eq!(results[1].score, 15);
    }

    #[test]
    fn test_experience_alone_keeps_listing() {
        let s = seeker(&["react", "node.js"], 3);
        let listings = vec![listing(3, &["java"], Some(ExperienceLevel::EntryLevel))];
        let results = recommend(&s, &listings, &ScoringWeights::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 5);
        assert_eq!(results[0].breakdown.skill_overlap, 0);
    }

    #[test]
    fn test_zero_years_skips_experience_and_excludes_zero_score() {
        let s = seeker(&[], 0);
        let listings = vec![listing(4, &[], Some(ExperienceLevel::Executive))];
        assert!(recommend(&s, &listings, &ScoringWeights::default()).is_empty());
    }

    #[test]
    fn test_empty_profile_yields_empty_result() {
        let s = SeekerProfile::default();
        let listings = vec![
            listing(1, &["rust"], Some(ExperienceLevel::EntryLevel)),
            listing(2, &["go", "sql"], None),
        ];
        assert!(recommend(&s, &listings, &ScoringWeights::default()).is_empty());
    }

    #[test]
    fn test_truncates_to_top_ten_descending() {
        let vocab: Vec<String> = (0..15).map(|i| format!("skill{i}")).collect();
        let vocab_refs: Vec<&str> = vocab.iter().map(String::as_str).collect();
        let s = seeker(&vocab_refs, 0);
        // listing i requires the first i+1 skills, so scores are 10, 20, …, 150
        let listings: Vec<JobListing> = (0..15)
            .map(|i| listing(i as i64, &vocab_refs[..=i], None))
            .collect();

        let results = recommend(&s, &listings, &ScoringWeights::default());
        assert_eq!(results.len(), 10);
        assert_eq!(ids(&results), (5..15).rev().collect::<Vec<i64>>());
        assert_eq!(results[0].score, 150);
        assert_eq!(results[9].score, 60);
    }

    #[test]
    fn test_one_year_short_earns_near_points() {
        let w = ScoringWeights::default();
        assert_eq!(experience_alignment_score(2, 3, &w), 2);
        assert_eq!(experience_alignment_score(1, 3, &w), 0);
        assert_eq!(experience_alignment_score(6, 6, &w), 5);
        assert_eq!(experience_alignment_score(0, 1, &w), 0);
        assert_eq!(experience_alignment_score(4, 0, &w), 0);
    }

    #[test]
    fn test_huge_years_text_still_meets_every_level() {
        let s = SeekerProfile {
            skills: parse_skill_set(None),
            years_of_experience: crate::recommendation::skills::parse_years_of_experience(Some(
                "99999999999 years",
            )),
        };
        let listings = vec![listing(1, &[], Some(ExperienceLevel::Executive))];
        let results = recommend(&s, &listings, &ScoringWeights::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 5);
    }

    #[test]
    fn test_ties_prefer_newer_listing_then_input_order() {
        let s = seeker(&["rust"], 0);
        let mut old = listing(1, &["rust"], None);
        old.posted_at -= Duration::days(30);
        let same_a = listing(2, &["rust"], None);
        let same_b = listing(3, &["rust"], None);
        let listings = vec![old, same_a, same_b];

        let results = recommend(&s, &listings, &ScoringWeights::default());
        assert_eq!(ids(&results), vec![2, 3, 1]);
    }

    #[test]
    fn test_inactive_listing_is_scored_without_panicking() {
        let s = seeker(&["rust"], 2);
        let mut inactive = listing(9, &["rust"], Some(ExperienceLevel::MidLevel));
        inactive.is_active = false;
        let listings = vec![inactive];
        let results = recommend(&s, &listings, &ScoringWeights::default());
        assert_eq!(results[0].score, 15);
    }

    #[test]
    fn test_custom_weights_are_honoured() {
        let weights = ScoringWeights {
            skill_match_points: 3,
            experience_met_points: 1,
            experience_near_points: 0,
            max_results: 1,
        };
        let s = seeker(&["rust", "sql"], 5);
        let listings = vec![
            listing(1, &["rust"], Some(ExperienceLevel::EntryLevel)),
            listing(2, &["rust", "sql"], Some(ExperienceLevel::EntryLevel)),
        ];
        let results = recommend(&s, &listings, &weights);
        assert_eq!(ids(&results), vec![2]);
        assert_eq!(results[0].score, 7);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let s = seeker(&["rust"], 3);
        let listings = vec![
            listing(1, &["go"], Some(ExperienceLevel::Lead)),
            listing(2, &["rust"], None),
        ];
        let before = listings.clone();
        let _ = recommend(&s, &listings, &ScoringWeights::default());
        assert_eq!(listings, before);
    }

    // ── Properties ──────────────────────────────────────────────────────────

    const VOCAB: &[&str] = &["rust", "go", "sql", "react", "node.js", "python", "java", "k8s"];

    fn arb_skills() -> impl Strategy<Value = Vec<&'static str>> {
        proptest::sample::subsequence(VOCAB, 0..=VOCAB.len())
    }

    fn arb_level() -> impl Strategy<Value = Option<ExperienceLevel>> {
        proptest::option::of(proptest::sample::select(ExperienceLevel::ALL.to_vec()))
    }

    fn arb_listings() -> impl Strategy<Value = Vec<JobListing>> {
        proptest::collection::vec((arb_skills(), arb_level(), 0i64..5), 0..25).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (skills, level, age_days))| {
                    let mut l = listing(i as i64, &skills, level);
                    l.posted_at -= Duration::days(age_days);
                    l
                })
                .collect()
        })
    }

    fn arb_seeker() -> impl Strategy<Value = SeekerProfile> {
        (arb_skills(), 0u32..8).prop_map(|(skills, years)| seeker(&skills, years))
    }

    proptest! {
        #[test]
        fn prop_adding_matching_skill_never_lowers_score(
            s in arb_seeker(),
            skills in arb_skills(),
            level in arb_level(),
            extra in proptest::sample::select(VOCAB.to_vec()),
        ) {
            let w = ScoringWeights::default();
            let base = listing(1, &skills, level);
            let mut widened = base.clone();
            widened.required_skills.insert(extra.to_string());
            prop_assert!(score_listing(&s, &widened, &w).total() >= score_listing(&s, &base, &w).total());
        }

        #[test]
        fn prop_results_positive_bounded_and_sorted(s in arb_seeker(), listings in arb_listings()) {
            let w = ScoringWeights::default();
            let results = recommend(&s, &listings, &w);
            let positive = listings
                .iter()
                .filter(|l| score_listing(&s, l, &w).total() > 0)
                .count();

            prop_assert!(results.iter().all(|r| r.score > 0));
            prop_assert!(results.len() <= w.max_results);
            prop_assert!(results.len() <= positive);
            prop_assert_eq!(results.len(), positive.min(w.max_results));
            for pair in results.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }

        #[test]
        fn prop_recommend_is_idempotent(s in arb_seeker(), listings in arb_listings()) {
            let w = ScoringWeights::default();
            let first = recommend(&s, &listings, &w);
            let second = recommend(&s, &listings, &w);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_matching_ignores_case_and_padding(skill in proptest::sample::select(VOCAB.to_vec())) {
            let padded = format!("python, {} ", skill.to_uppercase());
            let s = SeekerProfile {
                skills: parse_skill_set(Some(padded.as_str())),
                years_of_experience: 0,
            };
            let mut l = listing(1, &[], None);
            l.required_skills = parse_skill_set(Some(skill));
            prop_assert_eq!(count_matched_skills(&s, &l), 1);
        }
    }
}
