use log::error;
use thiserror::Error;

use super::conflict::{check_assignment, BusyAssignments, ConflictCheck, ProposedAssignment};
use super::repository;
use super::utils::{TripFormState, ValidationError};
use crate::api::{ApiClient, ApiError, TripCreatedResponse};

/// Terminal failures of one submit attempt. None are retried; the
/// operator corrects the draft and resubmits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Conflict(ConflictCheck),
    #[error("Failed to check ongoing trips: {0}")]
    Transport(ApiError),
}

/// Drives the new-trip flow: validate the draft, re-read the ongoing
/// snapshot, run the conflict check, and only then issue the write.
///
/// The snapshot can go stale between the read and the write — another
/// client may commit a conflicting assignment in between. This check is
/// a fast pre-filter; the backend's own constraints stay the final
/// arbiter.
pub struct TripViewModel {
    api: ApiClient,
}

impl TripViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn submit(&self, draft: &TripFormState) -> Result<TripCreatedResponse, SubmitError> {
        let payload = draft.to_payload()?;

        let snapshots = repository::fetch_ongoing_trips(&self.api).await.map_err(|err| {
            error!("Failed to fetch ongoing trip data: {}", err);
            SubmitError::Transport(err)
        })?;

        let busy = BusyAssignments::from_snapshots(&snapshots);
        let proposed = ProposedAssignment {
            vehicle_id: payload.vehicle_id,
            driver_id: payload.employee_id,
            helper_id: payload.helper_id,
            helper2_id: payload.helper2_id,
        };
        let outcome = check_assignment(&proposed, &busy);
        if !outcome.is_clear() {
            return Err(SubmitError::Conflict(outcome));
        }

        repository::submit_trip(&self.api, &payload).await.map_err(|err| {
            error!("Failed to create trip: {}", err);
            SubmitError::Transport(err)
        })
    }

    /// Busy sets for graying out dropdown options; fetched fresh on each
    /// call.
    pub async fn load_busy_assignments(&self) -> Result<BusyAssignments, ApiError> {
        let snapshots = repository::fetch_ongoing_trips(&self.api).await?;
        Ok(BusyAssignments::from_snapshots(&snapshots))
    }
}
