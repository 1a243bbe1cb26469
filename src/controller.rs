use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::{
    engine,
    errors::AppError,
    http::RemoteDataSource,
    models::{RankedRecord, RatingDraft},
    state::{FetchStatus, SharedFetchStatus, SharedSubmitPhase, SubmitPhase},
    store::NameStore,
};

/// How long the submitted confirmation stays up before the form
/// returns to accepting input.
pub const SUBMIT_RESET_DELAY: Duration = Duration::from_secs(2);

/// Mediates between the remote endpoint and the ranking engine: owns
/// the fetch status, the submission display window, and the persisted
/// submitter name.
pub struct RatingsController<R> {
    remote: R,
    names: NameStore,
    status: SharedFetchStatus,
    submission: SharedSubmitPhase,
    saved_name: Arc<Mutex<Option<String>>>,
    reset_generation: Arc<Mutex<u64>>,
}

impl<R: RemoteDataSource> RatingsController<R> {
    /// Loads the persisted submitter name at construction so the form
    /// can prefill it.
    pub fn new(remote: R, names: NameStore) -> Self {
        let saved_name = names.load();

        Self {
            remote,
            names,
            status: Arc::new(Mutex::new(FetchStatus::Loading)),
            submission: Arc::new(Mutex::new(SubmitPhase::Idle)),
            saved_name: Arc::new(Mutex::new(saved_name)),
            reset_generation: Arc::new(Mutex::new(0)),
        }
    }

    pub async fn status(&self) -> FetchStatus {
        self.status.lock().await.clone()
    }

    pub async fn submission(&self) -> SubmitPhase {
        *self.submission.lock().await
    }

    pub async fn saved_name(&self) -> Option<String> {
        self.saved_name.lock().await.clone()
    }

    /// Requests the full current collection, wholly replacing the
    /// previous one. A malformed payload degrades to an empty list so
    /// the results view stays renderable; only transport failure is
    /// surfaced as `Failed`. Loading terminates on every outcome.
    pub async fn fetch_all(&self) {
        {
            *self.status.lock().await = FetchStatus::Loading;
        }

        let next = match self.remote.fetch_all().await {
            Ok(records) => FetchStatus::Ready(records),
            Err(AppError::Deserialization(e)) => {
                tracing::warn!("Malformed ratings payload, showing empty results: {}", e);
                FetchStatus::Ready(Vec::new())
            }
            Err(e) => {
                tracing::error!("Failed to fetch ratings: {}", e);
                FetchStatus::Failed
            }
        };

        *self.status.lock().await = next;
    }

    /// Sends one rating. Best-effort: the transport outcome is
    /// returned to the caller, but the confirmation window runs on
    /// success and failure alike and auto-resets after
    /// `SUBMIT_RESET_DELAY`. The name is persisted only when the send
    /// succeeded.
    pub async fn submit(&self, draft: RatingDraft) -> Result<(), AppError> {
        let record = draft.into_record();

        {
            *self.submission.lock().await = SubmitPhase::Submitting;
        }

        let result = self.remote.submit(&record).await;

        match &result {
            Ok(()) => {
                if let Err(e) = self.names.save(&record.name) {
                    tracing::warn!("Failed to persist submitter name: {}", e);
                } else {
                    *self.saved_name.lock().await = Some(record.name.clone());
                }
            }
            Err(e) => {
                tracing::warn!("Rating submission abandoned: {}", e);
            }
        }

        {
            *self.submission.lock().await = SubmitPhase::Submitted;
        }
        self.schedule_reset().await;

        result
    }

    /// Ranked, filtered view of the current collection. Empty while
    /// loading or failed.
    pub async fn ranked(&self, filter_text: &str) -> Vec<RankedRecord> {
        match &*self.status.lock().await {
            FetchStatus::Ready(records) => engine::rank(records, filter_text),
            _ => Vec::new(),
        }
    }

    async fn schedule_reset(&self) {
        let generation = {
            let mut current = self.reset_generation.lock().await;
            *current += 1;
            *current
        };

        let reset_generation = self.reset_generation.clone();
        let submission = self.submission.clone();

        tokio::spawn(async move {
            sleep(SUBMIT_RESET_DELAY).await;

            // A newer submission supersedes this reset.
            if *reset_generation.lock().await != generation {
                tracing::debug!("Form reset {} superseded", generation);
                return;
            }

            *submission.lock().await = SubmitPhase::Idle;
        });
    }
}
