use serde::{Deserialize, Serialize};

use crate::models::rating::RatingRecord;

/// Rank marker for the first three entries of a ranked, filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Badge {
    Top,
    Second,
    Third,
}

impl Badge {
    /// Badge for a position in the filtered sequence. Positions past
    /// the podium get none.
    pub fn for_position(index: usize) -> Option<Badge> {
        match index {
            0 => Some(Badge::Top),
            1 => Some(Badge::Second),
            2 => Some(Badge::Third),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRecord {
    pub record: RatingRecord,
    pub badge: Option<Badge>,
}
