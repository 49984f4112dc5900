// Result-Set Insights
//
// Aggregations behind the insights panel: category and location leaders
// plus map markers for recognized German cities. Pure functions over the
// visible records; drawing charts is the front end's problem.

use crate::domain::{geo, JobRecord};
use serde::Serialize;
use std::collections::HashMap;

/// How many leaders each ranking keeps.
pub const TOP_N: usize = 5;

/// One label with its occurrence count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountedLabel {
    pub label: String,
    pub count: usize,
}

/// One recognized city with coordinates and posting count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityMarker {
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub top_job_types: Vec<CountedLabel>,
    pub top_locations: Vec<CountedLabel>,
    pub city_markers: Vec<CityMarker>,
}

/// Aggregate the visible records into the three insight views.
pub fn compute(records: &[&JobRecord]) -> Insights {
    Insights {
        top_job_types: top_job_types(records),
        top_locations: top_locations(records),
        city_markers: city_markers(records),
    }
}

/// Distinct job types of a page in first-seen order, trimmed, blanks
/// dropped. Feeds the type-selection control.
pub fn job_type_options(records: &[JobRecord]) -> Vec<String> {
    let mut seen = Vec::new();
    for job in records {
        for job_type in &job.job_types {
            let job_type = job_type.trim();
            if job_type.is_empty() {
                continue;
            }
            if !seen.iter().any(|known: &String| known == job_type) {
                seen.push(job_type.to_string());
            }
        }
    }
    seen
}

fn top_job_types(records: &[&JobRecord]) -> Vec<CountedLabel> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for job in records {
        for job_type in &job.job_types {
            let job_type = job_type.trim();
            if job_type.is_empty() {
                continue;
            }
            *counts.entry(job_type.to_string()).or_default() += 1;
        }
    }
    rank(counts)
}

fn top_locations(records: &[&JobRecord]) -> Vec<CountedLabel> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for job in records {
        let Some(location) = job.location.as_deref() else {
            continue;
        };
        if location.is_empty() {
            continue;
        }
        *counts.entry(location.to_string()).or_default() += 1;
    }
    rank(counts)
}

fn city_markers(records: &[&JobRecord]) -> Vec<CityMarker> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for job in records {
        let Some(location) = job.location.as_deref() else {
            continue;
        };
        if let Some(city) = geo::find_city_in_location(location) {
            *counts.entry(city).or_default() += 1;
        }
    }

    let mut markers: Vec<CityMarker> = counts
        .into_iter()
        .filter_map(|(city, count)| {
            geo::city_coords(city).map(|(lat, lon)| CityMarker {
                city: city.to_string(),
                lat,
                lon,
                count,
            })
        })
        .collect();
    markers.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.city.cmp(&b.city)));
    markers
}

/// Count-descending, label-ascending on ties, truncated to [`TOP_N`].
fn rank(counts: HashMap<String, usize>) -> Vec<CountedLabel> {
    let mut ranked: Vec<CountedLabel> = counts
        .into_iter()
        .map(|(label, count)| CountedLabel { label, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    ranked.truncate(TOP_N);
    ranked
}
