//! Command-line configuration for the Omok viewer.

use clap::Parser;

use crate::board::DEFAULT_SIZE;

/// Largest board the viewer can label with column letters (A-Z)
pub const MAX_VIEWER_SIZE: usize = 26;

/// Omok - five in a row, hot-seat
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "omok")]
#[command(about = "Two-player Omok board", long_about = None)]
#[command(version)]
pub struct ViewerConfig {
    /// Board size (N x N)
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Initial window width
    #[arg(long, default_value_t = 900.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 700.0)]
    pub height: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            log_level: "info".to_string(),
            width: 900.0,
            height: 700.0,
        }
    }
}

impl ViewerConfig {
    /// Check settings clap cannot express on its own
    pub fn validate(&self) -> Result<(), String> {
        if self.size == 0 || self.size > MAX_VIEWER_SIZE {
            return Err(format!(
                "board size must be between 1 and {MAX_VIEWER_SIZE}, got {}",
                self.size
            ));
        }
        Ok(())
    }
}
