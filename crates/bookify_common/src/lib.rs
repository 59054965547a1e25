// --- File: crates/bookify_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error taxonomy and HTTP mapping
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{HttpStatusCode, WidgetError};

// Re-export the boxed-future alias used by service traits
pub use services::BoxFuture;

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};
