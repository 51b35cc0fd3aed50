//! Credential sender: stores recipient/key/value credential pairs and emails
//! them to the recipient on demand, stamping the time of the last send.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
