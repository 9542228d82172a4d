use super::{
    client::ApiClient,
    types::{
        ApiError, CreateUserRequest, EmployeeResponse, MessageResponse, UpdateUserRequest,
        UserResponse,
    },
};

impl ApiClient {
    pub async fn get_users(&self) -> Result<Vec<UserResponse>, ApiError> {
        let base_url = self.resolved_base_url();
        let response = self
            .http_client()
            .get(format!("{}/users/", base_url))
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

    /// Drivers and helpers selectable on the new-trip form.
    pub async fn get_employees(&self) -> Result<Vec<EmployeeResponse>, ApiError> {
        let base_url = self.resolved_base_url();
        let response = self
            .http_client()
            .get(format!("{}/employees/", base_url))
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

    pub async fn register_user(&self, payload: &CreateUserRequest) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url();
        let response = self
            .http_client()
            .post(format!("{}/register/", base_url))
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

    pub async fn update_user(
        &self,
        user_id: i64,
        payload: &UpdateUserRequest,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url();
        let response = self
            .http_client()
            .put(format!("{}/user/{}/update/", base_url, user_id))
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

    pub async fn delete_user_by_username(&self, username: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url();
        let response = self
            .http_client()
            .delete(format!("{}/delete-user-by-username/{}/", base_url, username))
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
