use std::sync::Arc;
use tokio::sync::Mutex;

use crate::models::RatingRecord;

/// Lifecycle of the results fetch. The collection is wholly replaced
/// on each successful fetch, never merged.
#[derive(Debug, Clone)]
pub enum FetchStatus {
    Loading,
    Ready(Vec<RatingRecord>),
    Failed,
}

/// Lifecycle of one submission. Non-`Idle` means the form is in its
/// "button disabled" display window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Submitted,
}

pub type SharedFetchStatus = Arc<Mutex<FetchStatus>>;

pub type SharedSubmitPhase = Arc<Mutex<SubmitPhase>>;
