use std::sync::Arc;

use atlas_reserve::templates::ContactDetails;
use atlas_reserve::Mailer;

/// Shared handler state. The mailer sits behind a trait object so tests can
/// swap in a recording transport; everything else is plain configuration
/// injected once at startup.
#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn Mailer>,
    /// Customer-facing sender display name.
    pub sender_name: String,
    /// Admin notification recipient; `None` skips the second send.
    pub admin_email: Option<String>,
    pub contact: ContactDetails,
}
