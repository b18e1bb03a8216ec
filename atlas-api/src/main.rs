use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use atlas_api::{app, AppState};
use atlas_reserve::SmtpMailer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atlas_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = atlas_api::app_config::Config::load().context("Failed to load config")?;
    tracing::info!("Starting Atlas API on port {}", config.server.port);

    let mailer = SmtpMailer::new(&config.smtp).context("Failed to build SMTP transport")?;

    let app_state = AppState {
        mailer: Arc::new(mailer),
        sender_name: config.smtp.sender_name.clone(),
        admin_email: config.admin_email.clone(),
        contact: config.contact.clone(),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
