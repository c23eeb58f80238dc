// User Directory
// The canonical, append-only list of users for a session

use crate::models::{User, UserData};

/// Ordered list of users, replaced wholesale on every addition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the fetched records as-is, in the order they arrived.
    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Id the next added user receives: the current count plus one.
    ///
    /// Only unique while the list is append-only; a delete would make this collide.
    pub fn next_id(&self) -> u64 {
        self.users.len() as u64 + 1
    }

    /// A new directory equal to this one with `data` appended as the last entry.
    pub fn with_user(&self, data: UserData) -> Self {
        self.with_entry(data.into_user(self.next_id()))
    }

    /// A new directory with `user` appended exactly as given.
    pub fn with_entry(&self, user: User) -> Self {
        let mut users = self.users.clone();
        users.push(user);
        Self { users }
    }

    pub fn get_user(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn last(&self) -> Option<&User> {
        self.users.last()
    }
}
