use thiserror::Error;

use crate::api::{UpdateUserRequest, UserResponse};

/// Philippine mobile format: 11 digits starting with `09`.
pub fn is_valid_cellphone_no(cellphone_no: &str) -> bool {
    cellphone_no.len() == 11
        && cellphone_no.starts_with("09")
        && cellphone_no.chars().all(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error(
        "Invalid cellphone number. It must follow the local format: \
         09XXXXXXXXX (11 digits starting with 09)."
    )]
    InvalidCellphoneNumber,
}

/// Staged edits to one account. Only email and cellphone number are
/// editable; everything else renders read-only from the wrapped row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    original: UserResponse,
    pub email: String,
    pub cellphone_no: String,
}

impl ProfileDraft {
    pub fn new(user: UserResponse) -> Self {
        Self {
            email: user.email.clone(),
            cellphone_no: user.cellphone_no.clone(),
            original: user,
        }
    }

    pub fn user(&self) -> &UserResponse {
        &self.original
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_cellphone_no(mut self, cellphone_no: &str) -> Self {
        self.cellphone_no = cellphone_no.to_string();
        self
    }

    pub fn discard_edits(self) -> Self {
        Self::new(self.original)
    }

    pub fn has_changes(&self) -> bool {
        self.email != self.original.email || self.cellphone_no != self.original.cellphone_no
    }

    pub fn to_request(&self) -> Result<UpdateUserRequest, ProfileError> {
        if !self.cellphone_no.is_empty() && !is_valid_cellphone_no(&self.cellphone_no) {
            return Err(ProfileError::InvalidCellphoneNumber);
        }
        Ok(UpdateUserRequest {
            email: self.email.clone(),
            cellphone_no: self.cellphone_no.clone(),
        })
    }
}
