use async_trait::async_trait;
use redis::AsyncCommands;

use crate::application::ports::{CredentialStore, StoreError};
use crate::domain::Credential;

/// Hosted key-value backend: the whole collection is one JSON array stored
/// as a string under a single key.
pub struct RedisCredentialStore {
    client: redis::Client,
    key: String,
}

impl RedisCredentialStore {
    pub fn new(client: redis::Client, key: impl Into<String>) -> Self {
        Self {
            client,
            key: key.into(),
        }
    }

    pub fn connect(url: &str, key: impl Into<String>) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(url)?;
        Ok(Self::new(client, key))
    }
}

#[async_trait]
impl CredentialStore for RedisCredentialStore {
    async fn load(&self) -> Result<Vec<Credential>, StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let raw: Option<String> = conn.get(&self.key).await?;
        match raw {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, credentials: &[Credential]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(credentials)?;

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set(&self.key, raw).await?;
        Ok(())
    }
}
