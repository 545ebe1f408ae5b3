//! Logging setup

pub use log::{debug, info, warn};

/// Initialize env_logger at `info`, overridable through `RUST_LOG`
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
