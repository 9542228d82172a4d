use chrono::NaiveDate;
use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, PriorityQueueEntry, TotalsResponse},
};

/// What came of asking the backend to compute gross totals for a window.
#[derive(Debug, Clone, PartialEq)]
pub enum TotalsOutcome {
    /// A fresh totals row was stored.
    Saved(TotalsResponse),
    /// The backend declined the insert (a row for this window already
    /// exists) but recomputed the totals. Informational, not a failure.
    Recalculated,
}

impl TotalsOutcome {
    pub fn saved_id(&self) -> Option<i64> {
        match self {
            TotalsOutcome::Saved(totals) => Some(totals.id),
            TotalsOutcome::Recalculated => None,
        }
    }
}

impl ApiClient {
    /// Gross-payroll totals for a window. Only a transport failure is an
    /// error here; a backend rejection of the insert still reports as
    /// `Recalculated` since the computation itself ran.
    pub async fn calculate_totals(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<TotalsOutcome, ApiError> {
        let base_url = self.resolved_base_url();
        let response = self
            .http_client()
            .post(format!("{}/calculate_totals/", base_url))
            .json(&json!({
                "start_date": start_date,
                "end_date": end_date,
            }))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map(TotalsOutcome::Saved)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Ok(TotalsOutcome::Recalculated)
        }
    }

    pub async fn get_priority_queue(&self) -> Result<Vec<PriorityQueueEntry>, ApiError> {
        let base_url = self.resolved_base_url();
        let response = self
            .http_client()
            .get(format!("{}/priority-queue/", base_url))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}
