// Job Posting Domain Model

use serde::{Deserialize, Serialize};

/// One job posting as fetched from the job board.
///
/// Records are immutable once built: the source adapter constructs them at
/// ingestion and the pipeline only ever narrows or reorders borrowed views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company_name: String,
    /// Free-text location; the board omits it for some postings.
    pub location: Option<String>,
    /// Description exactly as delivered (HTML).
    pub description_html: String,
    /// Plain-text rendering of the description, produced at ingestion.
    pub description_text: String,
    pub url: String,
    pub remote: bool,
    /// Ordered as delivered; may be empty, entries are not required unique.
    pub job_types: Vec<String>,
    /// Unix seconds. None when the source omitted or mangled the field.
    pub created_at: Option<i64>,
}

impl JobRecord {
    /// Posting date as `YYYY-MM-DD`, when the source provided a timestamp.
    pub fn posted_on(&self) -> Option<String> {
        self.created_at.and_then(|secs| {
            chrono::DateTime::from_timestamp(secs, 0).map(|dt| dt.format("%Y-%m-%d").to_string())
        })
    }

    /// First `limit` characters of the plain-text description, trimmed.
    pub fn preview(&self, limit: usize) -> String {
        let text: String = self.description_text.chars().take(limit).collect();
        text.trim().to_string()
    }

    /// Build a record with sane defaults for the given title and company.
    ///
    /// **Note**: test support only. Production records come from the source
    /// adapter; tests adjust the public fields they care about.
    pub fn new_test(title: impl Into<String>, company_name: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            description_html: format!("<p>{} role</p>", title),
            description_text: format!("{} role", title),
            title,
            company_name: company_name.into(),
            location: None,
            url: "https://example.com/job".to_string(),
            remote: false,
            job_types: Vec::new(),
            created_at: None,
        }
    }
}
