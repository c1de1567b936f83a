//! Error handling utilities for MCP server

use rmcp::ErrorData;
use stride_core::StrideError;

/// Converts a tracker error into an MCP error. Bad input and unknown IDs are
/// the caller's fault and map to invalid params; everything else is internal.
pub fn to_mcp_error(message: &str, error: &StrideError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        StrideError::InvalidInput { .. }
        | StrideError::WorkoutNotFound { .. }
        | StrideError::CustomWorkoutNotFound { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
