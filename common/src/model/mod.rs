pub mod address;
pub mod calculation;
pub mod session;
pub mod user;
