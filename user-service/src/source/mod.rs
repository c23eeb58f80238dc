// User Sources
// Where the initial user list comes from

pub mod file;
pub mod http;

pub use file::FileUserSource;
pub use http::HttpUserSource;

use crate::error::ServiceResult;
use crate::models::User;

use async_trait::async_trait;

/// Loads the initial list of users, once, before the page is built.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch every user. Failures are returned to the caller untouched.
    async fn fetch_users(&self) -> ServiceResult<Vec<User>>;

    /// Short human-readable description used in logs
    fn describe(&self) -> String;
}

/// Fixed in-memory list
#[derive(Debug, Clone, Default)]
pub struct StaticUserSource {
    users: Vec<User>,
}

impl StaticUserSource {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserSource for StaticUserSource {
    async fn fetch_users(&self) -> ServiceResult<Vec<User>> {
        Ok(self.users.clone())
    }

    fn describe(&self) -> String {
        format!("{} static users", self.users.len())
    }
}

/// Decode a JSON array of user records.
pub fn parse_users(body: &[u8]) -> ServiceResult<Vec<User>> {
    Ok(serde_json::from_slice(body)?)
}
