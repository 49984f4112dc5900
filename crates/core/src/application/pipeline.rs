// Filter Pipeline
//
// Fixed-order narrowing filters over one fetched page. Each step keeps a
// subset of the previous step's output and never reorders it, so the active
// filters compose as a logical AND. Records are not mutated; the pipeline
// works on borrowed views.

use crate::domain::{FilterState, JobRecord};

/// Apply every active filter in `state`, in fixed order: remote flag,
/// location substring, keywords, job types. Inactive filters are skipped.
pub fn apply<'a>(records: &'a [JobRecord], state: &FilterState) -> Vec<&'a JobRecord> {
    let mut visible: Vec<&JobRecord> = records.iter().collect();

    if state.remote_only {
        visible.retain(|job| job.remote);
    }

    if !state.location_query.is_empty() {
        let query = state.location_query.to_lowercase();
        visible.retain(|job| matches_location(job, &query));
    }

    if !state.keywords.is_empty() {
        visible.retain(|job| matches_any_keyword(job, &state.keywords));
    }

    if !state.selected_job_types.is_empty() {
        visible.retain(|job| {
            job.job_types
                .iter()
                .any(|t| state.selected_job_types.contains(t))
        });
    }

    visible
}

/// Case-insensitive substring match on the location. Records without a
/// location drop out while this filter is active.
fn matches_location(job: &JobRecord, query_lower: &str) -> bool {
    job.location
        .as_ref()
        .is_some_and(|location| location.to_lowercase().contains(query_lower))
}

/// OR across the keywords, each matched case-insensitively against the
/// title or the plain-text description.
fn matches_any_keyword(job: &JobRecord, keywords: &[String]) -> bool {
    let title = job.title.to_lowercase();
    let description = job.description_text.to_lowercase();
    keywords
        .iter()
        .any(|keyword| title.contains(keyword.as_str()) || description.contains(keyword.as_str()))
}
