use chrono::{DateTime, Utc};

use crate::application::ports::{CredentialStore, Mailer, OutgoingEmail};
use crate::error::ApiError;

const SUBJECT: &str = "Your Credentials";

#[derive(Debug)]
pub struct SendOutcome {
    pub last_sent: DateTime<Utc>,
}

/// Emails the key/value pair to the credential's recipient and persists the
/// send timestamp. A relay failure leaves the stored record untouched.
pub async fn execute<S, M>(store: &S, mailer: &M, id: i64) -> Result<SendOutcome, ApiError>
where
    S: CredentialStore + ?Sized,
    M: Mailer + ?Sized,
{
    let mut credentials = store.load().await?;
    let credential = credentials
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(ApiError::NotFound)?;

    let email = OutgoingEmail {
        to: credential.recipient_email.clone(),
        subject: SUBJECT.to_string(),
        body: render_body(&credential.key, &credential.value),
    };
    mailer.send(&email).await.map_err(ApiError::MailDelivery)?;

    let now = Utc::now();
    credential.last_sent = Some(now);
    store.save(&credentials).await?;

    Ok(SendOutcome { last_sent: now })
}

fn render_body(key: &str, value: &str) -> String {
    format!(
        "Hello,\n\n\
         Here are your credentials:\n\
         Key: {key}\n\
         Value: {value}\n\n\
         Please DO NOTHING UNTIL TOLD OTHERWISE.\n\n\
         Thank you,\n\
         The Team\n"
    )
}
