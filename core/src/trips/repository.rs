use crate::api::{
    ApiClient, ApiError, OngoingTripResponse, RegisterTripRequest, TripCreatedResponse,
};

pub async fn fetch_ongoing_trips(api: &ApiClient) -> Result<Vec<OngoingTripResponse>, ApiError> {
    api.get_ongoing_trips().await
}

pub async fn submit_trip(
    api: &ApiClient,
    payload: &RegisterTripRequest,
) -> Result<TripCreatedResponse, ApiError> {
    api.register_trip(payload).await
}
