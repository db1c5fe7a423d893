pub mod catalog;
pub mod strategy;

pub use catalog::{issue_count, IssueCategory};
pub use strategy::{sample_issues, FixedScoring, RandomScoring, ScoringStrategy};
