pub mod mailer;
pub mod reference;
pub mod request;
pub mod templates;

pub use mailer::{MailError, Mailer, OutboundEmail, SmtpConfig, SmtpMailer};
pub use reference::reservation_reference;
pub use request::{ReservationRequest, ValidationError};
