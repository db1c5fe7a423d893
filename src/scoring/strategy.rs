use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use url::Url;

use crate::models::{Assessment, ScanIssues, Scores};
use super::catalog::{issue_count, IssueCategory};

/// Produces scores and issues for a submitted URL. The API layer only sees
/// this trait, so a real analyzer can replace the placeholder without touching
/// persistence or response shaping.
pub trait ScoringStrategy: Send + Sync {
    fn assess(&self, url: &Url) -> Assessment;

    /// Strategy name for logging
    fn strategy_name(&self) -> &str;
}

/// Placeholder scoring: uniform scores in `0..=100` and issues sampled
/// without replacement from each category's catalog.
pub struct RandomScoring {
    rng: Mutex<StdRng>,
}

impl RandomScoring {
    pub fn new() -> Self {
        Self { rng: Mutex::new(StdRng::from_entropy()) }
    }

    /// Reproducible output for demos.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl Default for RandomScoring {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringStrategy for RandomScoring {
    fn assess(&self, _url: &Url) -> Assessment {
        // The generator stays usable after a panicking holder.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let scores = Scores {
            accessibility: rng.gen_range(0..=100),
            ux_ui: rng.gen_range(0..=100),
            security: rng.gen_range(0..=100),
        };
        let issues = sample_issues(&scores, &mut *rng);
        Assessment { scores, issues }
    }

    fn strategy_name(&self) -> &str {
        "random"
    }
}

/// Fixed scores with the leading catalog entries as issues.
#[derive(Debug, Clone, Copy)]
pub struct FixedScoring {
    scores: Scores,
}

impl FixedScoring {
    pub fn new(accessibility: u8, ux_ui: u8, security: u8) -> Self {
        Self {
            scores: Scores {
                accessibility: accessibility.min(100),
                ux_ui: ux_ui.min(100),
                security: security.min(100),
            },
        }
    }
}

impl ScoringStrategy for FixedScoring {
    fn assess(&self, _url: &Url) -> Assessment {
        let pick = |category: IssueCategory, score: u8| -> Vec<String> {
            let catalog = category.catalog();
            catalog[..issue_count(score, catalog.len())]
                .iter()
                .map(|s| s.to_string())
                .collect()
        };

        Assessment {
            scores: self.scores,
            issues: ScanIssues {
                accessibility: pick(IssueCategory::Accessibility, self.scores.accessibility),
                ux_ui: pick(IssueCategory::UxUi, self.scores.ux_ui),
                security: pick(IssueCategory::Security, self.scores.security),
            },
        }
    }

    fn strategy_name(&self) -> &str {
        "fixed"
    }
}

/// Sample `issue_count(score)` distinct entries per category.
pub fn sample_issues<R: Rng + ?Sized>(scores: &Scores, rng: &mut R) -> ScanIssues {
    let mut sample = |category: IssueCategory, score: u8| -> Vec<String> {
        let catalog = category.catalog();
        catalog
            .choose_multiple(&mut *rng, issue_count(score, catalog.len()))
            .map(|s| s.to_string())
            .collect()
    };

    ScanIssues {
        accessibility: sample(IssueCategory::Accessibility, scores.accessibility),
        ux_ui: sample(IssueCategory::UxUi, scores.ux_ui),
        security: sample(IssueCategory::Security, scores.security),
    }
}
