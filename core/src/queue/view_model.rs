use log::error;

use super::repository;
use crate::api::{ApiClient, ApiError, PriorityQueueEntry};

/// Lowest-paid first. The sort is stable, so entries with equal salaries
/// keep the order the backend returned them in.
pub fn sort_by_ascending_salary(entries: &mut [PriorityQueueEntry]) {
    entries.sort_by(|a, b| a.base_salary.total_cmp(&b.base_salary));
}

/// Salary priority queue shown on the admin dashboard.
pub struct PriorityQueueViewModel {
    api: ApiClient,
    entries: Vec<PriorityQueueEntry>,
}

impl PriorityQueueViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[PriorityQueueEntry] {
        &self.entries
    }

    /// A failed fetch keeps the previous entries and surfaces the error;
    /// it is never rendered as an empty queue.
    pub async fn load(&mut self) -> Result<&[PriorityQueueEntry], ApiError> {
        let mut entries = repository::fetch_priority_queue(&self.api).await.map_err(|err| {
            error!("Error fetching priority queue: {}", err);
            err
        })?;
        sort_by_ascending_salary(&mut entries);
        self.entries = entries;
        Ok(&self.entries)
    }
}
