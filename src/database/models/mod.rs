pub mod account;
pub mod property;

pub use account::Account;
pub use property::{Property, PropertyRow};
