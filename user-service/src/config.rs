// Configuration
// Resolved settings for where the initial user list is loaded from

use crate::source::{FileUserSource, HttpUserSource, UserSource};

use std::path::PathBuf;

/// Collection endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Environment variable that overrides the endpoint
pub const ENDPOINT_ENV: &str = "USERDESK_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Http { endpoint: String },
    File { path: PathBuf },
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Http {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeskConfig {
    pub source: SourceConfig,
}

impl DeskConfig {
    /// A local file wins over the endpoint when both are given.
    pub fn resolve(endpoint: Option<String>, users_file: Option<PathBuf>) -> Self {
        let source = match (users_file, endpoint) {
            (Some(path), _) => SourceConfig::File { path },
            (None, Some(endpoint)) => SourceConfig::Http { endpoint },
            (None, None) => SourceConfig::default(),
        };
        Self { source }
    }

    pub fn build_source(&self) -> Box<dyn UserSource> {
        match &self.source {
            SourceConfig::Http { endpoint } => Box::new(HttpUserSource::new(endpoint.clone())),
            SourceConfig::File { path } => Box::new(FileUserSource::new(path.clone())),
        }
    }
}
