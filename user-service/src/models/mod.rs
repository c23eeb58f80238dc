pub mod user;

pub use user::{Address, Company, Geo, User, UserData};
