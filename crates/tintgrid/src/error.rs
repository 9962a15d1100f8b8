//! Error types for palette and scheme operations.

use thiserror::Error;

/// Errors that can occur when assigning or deriving cell colors.
///
/// None of these are fatal: derivation operations abort and leave their
/// target untouched, and callers are free to continue.
#[derive(Debug, Error)]
pub enum TintError {
    /// Input was not a 3- or 6-digit hex color.
    #[error("invalid hex color: {input:?}")]
    InvalidHex { input: String },

    /// The named cell has never been declared in the palette.
    #[error("unknown cell: {name:?}")]
    UnknownCell { name: String },

    /// A derivation needed the color of a cell that has none.
    #[error("missing source color for cell {name:?}")]
    MissingSourceColor { name: String },

    /// A scheme op referenced a table id that the scheme does not define.
    #[error("unknown table: {id:?}")]
    UnknownTable { id: String },

    /// The scheme document was not valid YAML for the expected shape.
    #[error("failed to parse scheme: {0}")]
    SchemeParse(#[from] serde_yaml::Error),
}

/// Result type for tintgrid operations.
pub type Result<T> = std::result::Result<T, TintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_name() {
        let err = TintError::MissingSourceColor {
            name: "holmium ore".to_string(),
        };
        assert!(err.to_string().contains("missing source color"));
        assert!(err.to_string().contains("holmium ore"));
    }

    #[test]
    fn display_quotes_invalid_hex_input() {
        let err = TintError::InvalidHex {
            input: "xyz".to_string(),
        };
        assert!(err.to_string().contains("invalid hex"));
        assert!(err.to_string().contains("xyz"));
    }
}
