use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Wardbook";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Address the combined HTML + API server binds to by default.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8430";

/// Database file name inside the data directory.
pub const DATABASE_FILE: &str = "appointments.sqlite";

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Get the application data directory
/// ~/Wardbook/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Wardbook")
}

/// Default path of the appointment database file.
pub fn default_database_path() -> PathBuf {
    app_data_dir().join(DATABASE_FILE)
}
