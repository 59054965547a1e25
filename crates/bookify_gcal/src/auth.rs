// --- File: crates/bookify_gcal/src/auth.rs ---
use bookify_config::GcalConfig;
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{read_service_account_key, ServiceAccountAuthenticator},
    CalendarHub,
};
use std::path::Path;
use thiserror::Error;

// Type aliases for clarity
type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

#[derive(Error, Debug)]
pub enum HubError {
    /// No service-account key path in the config. Callers treat this
    /// the same as any other unconfigured feed.
    #[error("google calendar credentials are not configured")]
    NotConfigured,
    #[error("calendar client setup failed: {0}")]
    Setup(#[from] std::io::Error),
}

/// Builds an authenticated calendar hub from the service-account key
/// referenced by the config.
pub async fn create_calendar_hub(config: &GcalConfig) -> Result<HubType, HubError> {
    let key_path = config.key_path.as_deref().ok_or(HubError::NotConfigured)?;

    let sa_key = read_service_account_key(Path::new(key_path)).await?;

    let auth = ServiceAccountAuthenticator::builder(sa_key).build().await?;

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()?
        .https_or_http()
        .enable_http1()
        .build();

    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    let hub = CalendarHub::new(client, auth);

    Ok(hub)
}
