pub mod add_credential;
pub mod list_credentials;
pub mod send_credential;
