// Wire types for the job-board API
// Every field carries a default so one malformed record degrades (empty
// strings, empty lists, no timestamp) instead of failing the whole page.

use joblens_core::domain::JobRecord;
use serde::{Deserialize, Deserializer};

use crate::html;

#[derive(Debug, Clone, Deserialize)]
pub struct JobsResponse {
    #[serde(default)]
    pub data: Vec<JobDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub job_types: Vec<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<i64>,
}

impl JobDto {
    pub fn into_record(self) -> JobRecord {
        let description_text = html::plain_text(&self.description);
        JobRecord {
            title: self.title,
            company_name: self.company_name,
            location: self.location,
            description_html: self.description,
            description_text,
            url: self.url,
            remote: self.remote,
            job_types: self.job_types,
            created_at: self.created_at,
        }
    }
}

/// Accept whatever the board puts in `created_at`; anything that is not an
/// integer becomes `None` rather than killing the page.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}
