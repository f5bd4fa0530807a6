//! Error types for the vanadis crate.
//!
//! Every fallible operation in the crate returns [`ColormapError`]; nothing in
//! the library panics on bad input.

use thiserror::Error;

/// The main error type for vanadis operations.
#[derive(Error, Debug)]
pub enum ColormapError {
    /// Channel curves (or a value sequence) disagree on the breakpoint count
    #[error("Structural mismatch: {message}")]
    StructuralMismatch { message: String },

    /// Normalization of an empty or constant sequence
    #[error("Degenerate range: {message}")]
    DegenerateRange { message: String },

    /// Operand that cannot be adapted to a breakpoint table
    #[error("Unsupported operand: {kind} cannot be converted to a breakpoint table")]
    UnsupportedOperand { kind: String },

    /// Malformed line in a palette file
    #[error("Palette parse error at line {line}: {message}")]
    PaletteParse { line: usize, message: String },

    /// Palette file without a single color stop
    #[error("Palette contains no color stops")]
    EmptyPalette,

    /// Breakpoint table violating the channel curve invariants
    #[error("Invalid breakpoint table ({channel} channel): {message}")]
    InvalidTable { channel: String, message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Export to an external representation failed
    #[error("Export error: {message}")]
    Export { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image encoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Convenience type alias for Results with ColormapError
pub type Result<T> = std::result::Result<T, ColormapError>;
