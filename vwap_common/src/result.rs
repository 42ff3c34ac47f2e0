//! Result type alias shared across the workspace.
use crate::error::VwapError;

/// Workspace-wide `Result` alias with `VwapError` as the default error.
pub type Result<T, E = VwapError> = std::result::Result<T, E>;
