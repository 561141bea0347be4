pub mod add;
pub mod get;
pub mod list;
pub mod verify;
