pub mod repository;
pub mod view_model;

pub use view_model::{sort_by_ascending_salary, PriorityQueueViewModel};
