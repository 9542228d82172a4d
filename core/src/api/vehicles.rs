use super::{
    client::ApiClient,
    types::{ApiError, RegisterVehicleRequest, VehicleResponse},
};

impl ApiClient {
    pub async fn get_vehicles(&self) -> Result<Vec<VehicleResponse>, ApiError> {
        let base_url = self.resolved_base_url();
        let response = self
            .http_client()
            .get(format!("{}/vehicles/", base_url))
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

    pub async fn register_vehicle(
        &self,
        payload: &RegisterVehicleRequest,
    ) -> Result<VehicleResponse, ApiError> {
        let base_url = self.resolved_base_url();
        let response = self
            .http_client()
            .post(format!("{}/register-vehicle/", base_url))
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

    pub async fn delete_vehicle_by_plate(&self, plate_number: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url();
        let response = self
            .http_client()
            .delete(format!("{}/delete-vehicle-by-plate/{}/", base_url, plate_number))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}
