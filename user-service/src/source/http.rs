// HTTP Source
// GET the users collection from a JSON endpoint

use crate::error::{ServiceError, ServiceResult};
use crate::models::User;
use crate::source::{parse_users, UserSource};

use async_trait::async_trait;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct HttpUserSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUserSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> ServiceResult<Vec<User>> {
        debug!(endpoint = %self.endpoint, "Fetching users");
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let users = parse_users(&body)?;
        info!(count = users.len(), endpoint = %self.endpoint, "Fetched users");
        Ok(users)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
