use thiserror::Error;

use crate::models::NavId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("Unknown navigation entry: {0}")]
    UnknownEntry(NavId),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid UI configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Mobile breakpoint must be a positive width, got {0}")]
    InvalidBreakpoint(f64),
}
