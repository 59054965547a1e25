// --- File: crates/bookify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Google Calendar Config ---
// Holds non-secret GCal config. The service-account key itself lives
// in the file referenced by key_path, outside the config tree.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GcalConfig {
    pub key_path: Option<String>,
    pub calendar_id: Option<String>,
    /// Cap on returned event count for a range fetch.
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl GcalConfig {
    /// True when both credentials and a target calendar are present.
    /// Anything less degrades to the not-configured feed.
    pub fn is_configured(&self) -> bool {
        self.key_path.is_some() && self.calendar_id.is_some()
    }
}

fn default_max_results() -> u32 {
    200
}

// --- Booking Widget Config ---
// The slot catalog and tier policy of the widget.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    /// Candidate slot start times in "HH:MM" display form.
    #[serde(default = "default_slot_times")]
    pub slot_times: Vec<String>,
    #[serde(default = "default_slot_duration_minutes")]
    pub slot_duration_minutes: i64,
    /// Free-slot count at or below which a day shows as limited.
    #[serde(default = "default_limited_threshold")]
    pub limited_threshold: usize,
    /// IANA time zone the slot times are anchored in.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            slot_times: default_slot_times(),
            slot_duration_minutes: default_slot_duration_minutes(),
            limited_threshold: default_limited_threshold(),
            time_zone: default_time_zone(),
        }
    }
}

fn default_slot_times() -> Vec<String> {
    ["10:00", "11:00", "13:00", "14:00", "15:00", "16:00"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_slot_duration_minutes() -> i64 {
    60
}

fn default_limited_threshold() -> usize {
    2
}

fn default_time_zone() -> String {
    "Asia/Tokyo".to_string()
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_gcal: bool,

    // --- Feature Configurations ---
    #[serde(default)]
    pub gcal: Option<GcalConfig>,
    #[serde(default)]
    pub booking: BookingConfig,
}
