pub mod conflict;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use conflict::{check_assignment, BusyAssignments, ConflictCheck, ProposedAssignment};
pub use utils::{DropEntry, TripFormState, ValidationError};
pub use view_model::{SubmitError, TripViewModel};
