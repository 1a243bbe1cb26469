use std::cmp::Ordering;

use crate::models::{Badge, RankedRecord, RatingRecord};

/// Sorts records by descending overall score, filters by venue, and
/// badges the podium positions of whatever survives the filter.
///
/// Pure and idempotent; empty input yields empty output. The filter is
/// a case-insensitive substring match against `location`, so filtering
/// can change which records end up badged.
pub fn rank(records: &[RatingRecord], filter_text: &str) -> Vec<RankedRecord> {
    let mut sorted: Vec<RatingRecord> = records.to_vec();

    // Stable sort: records with equal scores keep their original
    // relative order.
    sorted.sort_by(|a, b| {
        b.overall_score()
            .partial_cmp(&a.overall_score())
            .unwrap_or(Ordering::Equal)
    });

    let needle = filter_text.to_lowercase();

    sorted
        .into_iter()
        .filter(|record| needle.is_empty() || record.location.to_lowercase().contains(&needle))
        .enumerate()
        .map(|(index, record)| RankedRecord {
            badge: Badge::for_position(index),
            record,
        })
        .collect()
}

/// First entry of a ranked, filtered sequence. Drives the "directions
/// to the top result" action.
pub fn highest_rated(ranked: &[RankedRecord]) -> Option<&RatingRecord> {
    ranked.first().map(|entry| &entry.record)
}
