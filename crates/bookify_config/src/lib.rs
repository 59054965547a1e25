// --- File: crates/bookify_config/src/lib.rs ---
pub mod models;

pub use models::{AppConfig, BookingConfig, GcalConfig, ServerConfig};

use config::{Config, ConfigError, Environment, File};
use std::sync::Once;

static DOTENV: Once = Once::new();

/// Loads `.env` into the process environment exactly once. Missing
/// files are fine; real deployments set variables directly.
pub fn ensure_dotenv_loaded() {
    DOTENV.call_once(|| {
        if dotenv::dotenv().is_err() {
            tracing::debug!("no .env file found, relying on process environment");
        }
    });
}

/// Loads the unified application configuration.
///
/// Layering, lowest priority first: built-in defaults, then
/// `config/default.*`, then `config/{RUN_ENV}.*`, then environment
/// variables with the `BOOKIFY` prefix (`BOOKIFY__SERVER__PORT` etc.).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let run_env = std::env::var("RUN_ENV").unwrap_or_else(|_| "default".to_string());

    Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8086)?
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_env)).required(false))
        .add_source(Environment::with_prefix("BOOKIFY").separator("__"))
        .build()?
        .try_deserialize()
}
