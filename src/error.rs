//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. The cache itself is
//! infallible; these errors come from the HTTP and decoding layers.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for API access and command handling.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The HTTP request could not be sent or its body could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected
    #[error("Failed to parse JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered 404 for the requested resource
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API answered with any other non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// Writing command output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command received an argument it cannot use
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
