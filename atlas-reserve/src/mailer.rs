use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::Deserialize;

/// SMTP transport settings, injected from configuration at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// true = implicit TLS (wrapper), false = STARTTLS upgrade.
    pub secure: bool,
    pub user: String,
    pub password: String,
    /// Display name shown as the customer-facing sender.
    pub sender_name: String,
}

/// One outbound HTML email, fully rendered before it reaches the transport.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub from_name: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("adresse email invalide: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("construction du message impossible: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("envoi SMTP échoué: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("transport indisponible: {0}")]
    Unavailable(String),
}

/// Seam between the intake handler and the SMTP provider. Tests substitute a
/// recording implementation; production uses [`SmtpMailer`].
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: OutboundEmail) -> Result<(), MailError>;
}

/// Production mailer backed by lettre's async SMTP transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender_address: String,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        };

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.user.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            sender_address: config.user.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutboundEmail) -> Result<(), MailError> {
        let from: Mailbox = format!("\"{}\" <{}>", mail.from_name, self.sender_address).parse()?;
        let to: Mailbox = mail.to.parse()?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(&mail.subject)
            .header(ContentType::TEXT_HTML)
            .body(mail.html_body)?;

        self.transport.send(message).await?;
        tracing::debug!(to = %mail.to, subject = %mail.subject, "email dispatched");
        Ok(())
    }
}
