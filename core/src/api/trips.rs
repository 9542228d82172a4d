use chrono::NaiveDate;

use super::{
    client::ApiClient,
    types::{ApiError, OngoingTripResponse, RegisterTripRequest, TripCreatedResponse, TripSummaryResponse},
};
use crate::utils::time::api_date;

impl ApiClient {
    /// Snapshot of every trip that has not yet completed. Callers run
    /// the conflict check against this immediately; the snapshot is not
    /// cached.
    pub async fn get_ongoing_trips(&self) -> Result<Vec<OngoingTripResponse>, ApiError> {
        let base_url = self.resolved_base_url();
        let response = self
            .http_client()
            .get(format!("{}/ongoing-trips/", base_url))
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

    pub async fn register_trip(
        &self,
        payload: &RegisterTripRequest,
    ) -> Result<TripCreatedResponse, ApiError> {
        let base_url = self.resolved_base_url();
        let response = self
            .http_client()
            .post(format!("{}/register-trip/", base_url))
            .json(payload)
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

    pub async fn get_trips_by_date_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<TripSummaryResponse>, ApiError> {
        let base_url = self.resolved_base_url();
        let response = self
            .http_client()
            .get(format!("{}/trips-by-date-range/", base_url))
            .query(&[
                ("start_date", api_date(start_date)),
                ("end_date", api_date(end_date)),
            ])
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
