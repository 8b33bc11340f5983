use anyhow::Context;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{MailProvider, OutgoingEmail};

#[derive(Clone)]
pub struct SmtpMailProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailProvider {
    pub fn new(host: &str, username: String, password: String) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .with_context(|| format!("invalid SMTP relay host {host}"))?
            .credentials(Credentials::new(username, password))
            .build();

        Ok(Self { transport })
    }

    /// Opens a connection and authenticates without sending anything.
    pub async fn verify(&self) -> anyhow::Result<()> {
        let ready = self
            .transport
            .test_connection()
            .await
            .context("SMTP connection check failed")?;
        anyhow::ensure!(ready, "SMTP server did not accept the connection check");
        Ok(())
    }
}

#[async_trait]
impl MailProvider for SmtpMailProvider {
    async fn send_email(&self, email: &OutgoingEmail) -> anyhow::Result<()> {
        let from: Mailbox = email
            .from
            .parse()
            .with_context(|| format!("invalid sender address {:?}", email.from))?;
        let to: Mailbox = email
            .to
            .parse()
            .with_context(|| format!("invalid recipient address {:?}", email.to))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(email.html.clone())
            .context("failed to build email message")?;

        self.transport
            .send(message)
            .await
            .context("failed to send email over SMTP")?;

        Ok(())
    }
}
