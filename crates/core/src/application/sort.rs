// Sort Stage
//
// Runs strictly after filtering. `Vec::sort_by` is stable, so records with
// equal keys keep their filtered order. Records without a timestamp sort
// last under either timestamp direction.

use crate::domain::{JobRecord, SortKey};
use std::cmp::Ordering;

/// Reorder the filtered set by the selected key.
pub fn apply<'a>(mut records: Vec<&'a JobRecord>, sort_key: SortKey) -> Vec<&'a JobRecord> {
    match sort_key {
        SortKey::Newest => records.sort_by(|a, b| by_timestamp(a, b, true)),
        SortKey::Oldest => records.sort_by(|a, b| by_timestamp(a, b, false)),
        // Plain codepoint order, deliberately locale-insensitive.
        SortKey::CompanyName => records.sort_by(|a, b| a.company_name.cmp(&b.company_name)),
    }
    records
}

fn by_timestamp(a: &JobRecord, b: &JobRecord, descending: bool) -> Ordering {
    match (a.created_at, b.created_at) {
        (Some(left), Some(right)) => {
            if descending {
                right.cmp(&left)
            } else {
                left.cmp(&right)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
