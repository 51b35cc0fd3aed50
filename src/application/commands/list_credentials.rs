use crate::application::ports::CredentialStore;
use crate::domain::Credential;
use crate::error::ApiError;

pub async fn execute<S: CredentialStore + ?Sized>(store: &S) -> Result<Vec<Credential>, ApiError> {
    Ok(store.load().await?)
}
