// User Models
// Records decoded from the users endpoint and the draft shape edited by the form

use serde::{Deserialize, Serialize};

/// A user as held in the canonical list.
///
/// The profile fields live in [`UserData`] and are flattened on the wire, so a
/// record from the endpoint decodes as `{ "id": 1, "name": ..., "address": {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(flatten)]
    pub data: UserData,
}

impl User {
    pub fn new(id: u64, data: UserData) -> Self {
        Self { id, data }
    }
}

/// Every field of a user except its id. This is the draft the form edits.
///
/// Missing fields decode to empty strings so a draft never has absent parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserData {
    pub name: String,
    pub email: String,
    pub username: String,
    pub phone: String,
    pub website: String,
    pub company: Company,
    pub address: Address,
}

impl UserData {
    /// Attach an id, turning the draft into a list entry.
    pub fn into_user(self, id: u64) -> User {
        User::new(id, self)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `@username`, or `None` when the username is empty.
    pub fn handle(&self) -> Option<String> {
        (!self.username.is_empty()).then(|| format!("@{}", self.username))
    }
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        user.data.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Coordinates are kept as text, the way the endpoint serves them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}
