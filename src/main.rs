use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use credsender::application::ports::CredentialStore;
use credsender::config::{Settings, StorageBackend};
use credsender::infrastructure::email::SmtpMailer;
use credsender::infrastructure::http::create_router;
use credsender::infrastructure::persistence::{FileCredentialStore, RedisCredentialStore};
use credsender::infrastructure::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("credsender=info,tower_http=info")),
        )
        .init();

    let settings = Settings::load().context("failed to load configuration")?;

    let store: Arc<dyn CredentialStore> = match settings.storage.backend {
        StorageBackend::File => {
            tracing::info!(path = %settings.storage.file_path.display(), "using file store");
            Arc::new(FileCredentialStore::new(settings.storage.file_path.clone()))
        }
        StorageBackend::Redis => {
            tracing::info!(key = %settings.storage.redis_key, "using redis store");
            Arc::new(
                RedisCredentialStore::connect(
                    &settings.storage.redis_url,
                    settings.storage.redis_key.clone(),
                )
                .context("failed to open redis client")?,
            )
        }
    };
    let mailer = Arc::new(SmtpMailer::new(&settings.smtp).context("failed to configure smtp")?);

    let state = AppState::new(store, mailer);
    let app = create_router(state, &settings.ui.static_dir);

    let addr = settings.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "credential sender listening");
    axum::serve(listener, app).await?;

    Ok(())
}
