use crate::api::{ApiClient, ApiError, PriorityQueueEntry};

pub async fn fetch_priority_queue(api: &ApiClient) -> Result<Vec<PriorityQueueEntry>, ApiError> {
    api.get_priority_queue().await
}
