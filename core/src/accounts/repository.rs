use crate::api::{
    ApiClient, ApiError, CreateUserRequest, MessageResponse, UpdateUserRequest, UserResponse,
};

pub async fn fetch_users(api: &ApiClient) -> Result<Vec<UserResponse>, ApiError> {
    api.get_users().await
}

pub async fn update_user(
    api: &ApiClient,
    user_id: i64,
    payload: &UpdateUserRequest,
) -> Result<MessageResponse, ApiError> {
    api.update_user(user_id, payload).await
}

pub async fn register_user(
    api: &ApiClient,
    payload: &CreateUserRequest,
) -> Result<UserResponse, ApiError> {
    api.register_user(payload).await
}

pub async fn delete_user(api: &ApiClient, username: &str) -> Result<(), ApiError> {
    api.delete_user_by_username(username).await
}
