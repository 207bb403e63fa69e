//! Structured errors for the newsgate MCP server.
//!
//! Service error kinds are translated into JSON-RPC error codes here, so the
//! core crate stays free of transport concerns.

use newsgate_core::{Error, ErrorKind};
use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Errors surfaced by tool implementations.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Failure reported by the retrieval service.
    #[error(transparent)]
    Service(#[from] Error),

    /// Tool output could not be encoded.
    #[error("INTERNAL: {0}")]
    Serialize(String),
}

/// JSON-RPC code for each service error kind.
pub fn error_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::InvalidInput => -32602,
        ErrorKind::NotFound => -32001,
        ErrorKind::UpstreamFailure => -32003,
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        let (code, message) = match &err {
            ToolError::Service(e) => (error_code(e.kind()), e.message().to_string()),
            ToolError::Serialize(msg) => (-32603, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_codes() {
        let cases = [
            (Error::InvalidInput("article count cannot be more than 10".into()), -32602),
            (Error::NotFound("no match".into()), -32001),
            (Error::UpstreamFailure("HTTP error: 503".into()), -32003),
        ];

        for (err, code) in cases {
            let message = err.message().to_string();
            let mcp_err: McpError = ToolError::from(err).into();
            assert_eq!(mcp_err.code.0, code);
            assert_eq!(mcp_err.message, message);
        }
    }

    #[test]
    fn test_serialize_error_code() {
        let mcp_err: McpError = ToolError::Serialize("bad".into()).into();
        assert_eq!(mcp_err.code.0, -32603);
    }
}
