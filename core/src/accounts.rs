pub mod repository;
pub mod utils;
pub mod view_model;

pub use utils::{is_valid_cellphone_no, ProfileDraft, ProfileError};
pub use view_model::{AccountsViewModel, SaveProfileError};
