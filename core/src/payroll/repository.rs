use crate::api::{ApiClient, ApiError, TotalsOutcome, TripSummaryResponse};

use super::window::PayrollWindow;

pub async fn fetch_trips_in_window(
    api: &ApiClient,
    window: PayrollWindow,
) -> Result<Vec<TripSummaryResponse>, ApiError> {
    api.get_trips_by_date_range(window.start, window.end).await
}

pub async fn calculate_totals(
    api: &ApiClient,
    window: PayrollWindow,
) -> Result<TotalsOutcome, ApiError> {
    api.calculate_totals(window.start, window.end).await
}
