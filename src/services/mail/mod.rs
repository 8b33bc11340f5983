pub mod smtp;

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[async_trait]
pub trait MailProvider: Send + Sync {
    async fn send_email(&self, email: &OutgoingEmail) -> anyhow::Result<()>;
}
