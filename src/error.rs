//! Error types.

use thiserror::Error;

/// Errors produced while decoding a relations response or building a graph from it.
#[derive(Debug, Error)]
pub enum GraphError {
	/// The response cannot be projected into a graph (e.g. it has no root asset).
	#[error("invalid input: {0}")]
	InvalidInput(String),

	/// The response body is not valid JSON for the expected shape.
	#[error("failed to decode relations response: {0}")]
	Decode(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GraphError>;
