use log::error;
use thiserror::Error;

use super::repository;
use super::utils::{ProfileDraft, ProfileError};
use crate::api::{ApiClient, ApiError, CreateUserRequest, UserResponse};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SaveProfileError {
    #[error("Select a user before saving.")]
    NoSelection,
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("There was an error updating the profile: {0}")]
    Transport(ApiError),
}

/// Drives the accounts page: list users, stage edits to one of them,
/// save the staged edits, register and delete accounts.
pub struct AccountsViewModel {
    api: ApiClient,
    users: Vec<UserResponse>,
    draft: Option<ProfileDraft>,
}

impl AccountsViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            users: Vec::new(),
            draft: None,
        }
    }

    pub fn users(&self) -> &[UserResponse] {
        &self.users
    }

    pub fn draft(&self) -> Option<&ProfileDraft> {
        self.draft.as_ref()
    }

    pub async fn load_users(&mut self) -> Result<&[UserResponse], ApiError> {
        self.users = repository::fetch_users(&self.api).await?;
        Ok(&self.users)
    }

    /// Selecting a user resets any staged edits to that user's current
    /// row. Returns false when the id is not in the loaded listing.
    pub fn select_user(&mut self, user_id: i64) -> bool {
        match self.users.iter().find(|user| user.id == user_id) {
            Some(user) => {
                self.draft = Some(ProfileDraft::new(user.clone()));
                true
            }
            None => false,
        }
    }

    /// Replaces the staged edits; the draft must wrap the selected user.
    pub fn stage(&mut self, draft: ProfileDraft) {
        self.draft = Some(draft);
    }

    /// Validates and persists the staged edits, then folds them back
    /// into the cached listing so the page reflects what was saved.
    pub async fn save_profile(&mut self) -> Result<(), SaveProfileError> {
        let draft = self.draft.as_ref().ok_or(SaveProfileError::NoSelection)?;
        let request = draft.to_request()?;
        let user_id = draft.user().id;

        repository::update_user(&self.api, user_id, &request)
            .await
            .map_err(|err| {
                error!("Error updating profile for user {}: {}", user_id, err);
                SaveProfileError::Transport(err)
            })?;

        if let Some(user) = self.users.iter_mut().find(|user| user.id == user_id) {
            user.email = request.email.clone();
            user.cellphone_no = request.cellphone_no.clone();
            self.draft = Some(ProfileDraft::new(user.clone()));
        }
        Ok(())
    }

    pub async fn register_user(
        &mut self,
        payload: &CreateUserRequest,
    ) -> Result<UserResponse, ApiError> {
        let created = repository::register_user(&self.api, payload).await?;
        self.users.push(created.clone());
        Ok(created)
    }

    pub async fn delete_user(&mut self, username: &str) -> Result<(), ApiError> {
        repository::delete_user(&self.api, username).await?;
        self.users.retain(|user| user.username != username);
        if self
            .draft
            .as_ref()
            .is_some_and(|draft| draft.user().username == username)
        {
            self.draft = None;
        }
        Ok(())
    }
}
