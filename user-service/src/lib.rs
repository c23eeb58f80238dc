// User Service Library
// Records, draft form state and listing state for the userdesk user screen

pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod services;
pub mod source;

// Re-export commonly used types
pub use error::{FormError, ServiceError, ServiceResult};

pub use config::{DeskConfig, SourceConfig, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use form::{FormMode, FormOutcome, ParseFieldError, UserField, UserForm};
pub use models::{Address, Company, Geo, User, UserData};
pub use services::{UserDirectory, UsersPage};
pub use source::{FileUserSource, HttpUserSource, StaticUserSource, UserSource};
