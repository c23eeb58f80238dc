// File Source
// Read the users collection from a local JSON file

use crate::error::{ServiceError, ServiceResult};
use crate::models::User;
use crate::source::{parse_users, UserSource};

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

/// Offline source with the same decoding rules as the HTTP endpoint
#[derive(Debug, Clone)]
pub struct FileUserSource {
    path: PathBuf,
}

impl FileUserSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UserSource for FileUserSource {
    async fn fetch_users(&self) -> ServiceResult<Vec<User>> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|source| ServiceError::Io {
                path: self.path.clone(),
                source,
            })?;
        let users = parse_users(&body)?;
        info!(count = users.len(), path = %self.path.display(), "Loaded users");
        Ok(users)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
