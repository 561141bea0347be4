pub mod cli;
pub mod config;
pub mod errors;
pub mod otp;
pub mod store;
