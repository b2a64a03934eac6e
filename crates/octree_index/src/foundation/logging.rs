//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Honours `RUST_LOG`; safe to call more than once.
pub fn init() {
    let _ = env_logger::try_init();
}
