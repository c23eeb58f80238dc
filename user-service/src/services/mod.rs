pub mod user_directory;
pub mod users_page;

pub use user_directory::UserDirectory;
pub use users_page::UsersPage;
