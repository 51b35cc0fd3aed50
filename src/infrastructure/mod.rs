// Infrastructure layer - HTTP adapters on the driving side, storage and SMTP
// adapters on the driven side.

pub mod email;
pub mod http;
pub mod persistence;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::ports::{CredentialStore, Mailer};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CredentialStore>,
    pub mailer: Arc<dyn Mailer>,
    /// Serializes read-modify-write cycles against the whole-collection
    /// store; without it concurrent POSTs can mint duplicate ids or lose
    /// updates.
    pub store_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn CredentialStore>, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            store,
            mailer,
            store_lock: Arc::new(Mutex::new(())),
        }
    }
}
