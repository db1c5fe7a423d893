use serde::Serialize;

const ACCESSIBILITY_ISSUES: [&str; 4] = [
    "Missing alt text on images",
    "Insufficient color contrast",
    "Form inputs without associated labels",
    "Missing ARIA landmarks",
];

const UX_UI_ISSUES: [&str; 4] = [
    "Navigation is not mobile responsive",
    "Inconsistent button styles",
    "Slow initial page load",
    "Unclear call-to-action",
];

const SECURITY_ISSUES: [&str; 4] = [
    "Missing HTTPS redirect",
    "Missing Content-Security-Policy header",
    "Outdated TLS configuration",
    "Cookies set without the Secure flag",
];

/// Score points per additional reported issue.
const POINTS_PER_ISSUE: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Accessibility,
    UxUi,
    Security,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 3] = [
        IssueCategory::Accessibility,
        IssueCategory::UxUi,
        IssueCategory::Security,
    ];

    /// The canned issue descriptions sampled for this category.
    pub fn catalog(self) -> &'static [&'static str] {
        match self {
            IssueCategory::Accessibility => &ACCESSIBILITY_ISSUES,
            IssueCategory::UxUi => &UX_UI_ISSUES,
            IssueCategory::Security => &SECURITY_ISSUES,
        }
    }
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueCategory::Accessibility => write!(f, "accessibility"),
            IssueCategory::UxUi => write!(f, "ux_ui"),
            IssueCategory::Security => write!(f, "security"),
        }
    }
}

/// Number of issues to report for a score: one per 25 points below 100, at
/// least one, and never more than the catalog holds.
pub fn issue_count(score: u8, catalog_len: usize) -> usize {
    let missing = 100u8.saturating_sub(score);
    let count = (missing / POINTS_PER_ISSUE) as usize;
    count.max(1).min(catalog_len)
}
