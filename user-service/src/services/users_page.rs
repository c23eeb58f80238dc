// Users Page
// Listing surface state: owns the canonical list and the add modal

use crate::error::FormError;
use crate::form::{FormOutcome, UserField, UserForm};
use crate::models::{User, UserData};
use crate::services::UserDirectory;

use tracing::{debug, info};

/// The page behind the card grid.
///
/// The modal never touches the directory itself; the page routes the modal's
/// [`FormOutcome`] back into its own state.
#[derive(Debug, Clone, Default)]
pub struct UsersPage {
    directory: UserDirectory,
    modal: Option<UserForm>,
}

impl UsersPage {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            directory: UserDirectory::from_users(users),
            modal: None,
        }
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn users(&self) -> &[User] {
        self.directory.users()
    }

    pub fn modal(&self) -> Option<&UserForm> {
        self.modal.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// The "Add User" action. Always starts from an empty draft.
    pub fn open_add_modal(&mut self) {
        debug!("Opening add user modal");
        self.modal = Some(UserForm::add());
    }

    /// Replace one field of the open draft.
    pub fn change_field(
        &mut self,
        field: UserField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let form = self.modal.as_ref().ok_or(FormError::NotOpen)?;
        self.modal = Some(form.with_change(field, value));
        Ok(())
    }

    /// Save the open modal. A blocked submit leaves the modal open with its draft.
    pub fn submit_modal(&mut self) -> Result<User, FormError> {
        let form = self.modal.as_ref().ok_or(FormError::NotOpen)?;
        let outcome = form
            .submit()
            .inspect_err(|err| debug!(error = %err, "Submit blocked"))?;
        self.handle_outcome(outcome).ok_or(FormError::NotOpen)
    }

    /// Dismiss the open modal, dropping its draft.
    pub fn close_modal(&mut self) {
        if let Some(form) = self.modal.take() {
            self.handle_outcome(form.cancel());
        }
    }

    /// Route a modal outcome. Returns the appended user for a submission.
    pub fn handle_outcome(&mut self, outcome: FormOutcome) -> Option<User> {
        match outcome {
            FormOutcome::Submitted(draft) => Some(self.handle_submit(draft)),
            FormOutcome::Closed => {
                debug!("Add user modal closed");
                self.modal = None;
                None
            }
        }
    }

    /// Append `draft` with id `len + 1` and close the modal.
    pub fn handle_submit(&mut self, draft: UserData) -> User {
        let user = draft.into_user(self.directory.next_id());
        self.directory = self.directory.with_entry(user.clone());
        self.modal = None;
        info!(user_id = user.id, name = %user.data.name, "User added");
        user
    }
}
