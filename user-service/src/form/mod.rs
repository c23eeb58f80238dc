// Draft Form
// Add/edit modal state: an open form owns a private draft until it is submitted or closed

pub mod field;

pub use field::{ParseFieldError, UserField};

use crate::error::FormError;
use crate::models::{User, UserData};

/// Whether the form creates a new user or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    /// Carries the id of the record the draft was copied from
    Edit { id: u64 },
}

/// What an open form hands back to its owner when it closes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Save was accepted; the draft is emitted unchanged
    Submitted(UserData),
    /// The form was dismissed; the draft is dropped
    Closed,
}

/// An open add/edit form.
///
/// A closed form is simply the absence of one (`Option<UserForm>` on the owner).
/// Field changes return a new form; the previous value is left as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    mode: FormMode,
    draft: UserData,
}

impl UserForm {
    /// Open with an all-empty draft.
    pub fn add() -> Self {
        Self {
            mode: FormMode::Add,
            draft: UserData::default(),
        }
    }

    /// Open pre-filled with a field-for-field copy of `user`.
    pub fn edit(user: &User) -> Self {
        Self {
            mode: FormMode::Edit { id: user.id },
            draft: UserData::from(user),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &UserData {
        &self.draft
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add User",
            FormMode::Edit { .. } => "Edit User",
        }
    }

    pub fn value(&self, field: UserField) -> &str {
        field.value(&self.draft)
    }

    /// Form with `field` set to `value` and every other field unchanged.
    pub fn with_change(&self, field: UserField, value: impl Into<String>) -> Self {
        Self {
            mode: self.mode.clone(),
            draft: field.apply(&self.draft, value),
        }
    }

    /// Required fields that are still empty, in form order.
    pub fn missing_required(&self) -> Vec<UserField> {
        UserField::REQUIRED
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect()
    }

    /// Close the form by saving.
    ///
    /// The draft is emitted as-is. The only gate is the required-field check the modal
    /// host applies; when it fails the form stays usable and the caller keeps it open.
    pub fn submit(&self) -> Result<FormOutcome, FormError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(FormError::MissingRequired(missing));
        }
        Ok(FormOutcome::Submitted(self.draft.clone()))
    }

    /// Close the form without saving.
    pub fn cancel(self) -> FormOutcome {
        FormOutcome::Closed
    }
}
