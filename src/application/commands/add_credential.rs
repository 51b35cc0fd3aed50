use crate::application::ports::CredentialStore;
use crate::domain::{key_exists, next_id, Credential, Email};
use crate::error::ApiError;

pub struct AddCredentialCommand {
    pub recipient_email: String,
    pub key: String,
    pub value: String,
}

/// Appends a credential to the collection. The key must not already exist;
/// the id is assigned as max existing id + 1.
pub async fn execute<S: CredentialStore + ?Sized>(
    store: &S,
    cmd: AddCredentialCommand,
) -> Result<Credential, ApiError> {
    if cmd.recipient_email.trim().is_empty()
        || cmd.key.trim().is_empty()
        || cmd.value.trim().is_empty()
    {
        return Err(ApiError::MissingFields);
    }
    let recipient = Email::new(cmd.recipient_email).map_err(|_| ApiError::InvalidEmail)?;

    let mut credentials = store.load().await?;
    if key_exists(&credentials, &cmd.key) {
        return Err(ApiError::DuplicateKey);
    }

    let credential = Credential {
        id: next_id(&credentials),
        recipient_email: recipient.into_string(),
        key: cmd.key,
        value: cmd.value,
        last_sent: None,
    };
    credentials.push(credential.clone());
    store.save(&credentials).await?;

    Ok(credential)
}
