//! Errors surfaced across the MCP protocol boundary.
//!
//! Tool failures never become protocol errors; they are reported as
//! `{ok: false, error}` payloads. Only a call for an unknown tool fails here.

/// MCP-level error.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum McpError {
    /// No tool with this name is registered
    #[display("Tool not found: {}", _0)]
    ToolNotFound(String),
    /// Result could not be serialized for the transport
    #[display("Serialization failed: {}", _0)]
    Serialization(String),
}

impl std::error::Error for McpError {}

/// Result type for MCP operations.
pub type McpResult<T> = Result<T, McpError>;
