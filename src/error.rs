//! Error types for xfl-codec

use thiserror::Error;

/// Errors raised by the codec.
///
/// XFL construction never produces one of these: an out-of-range exponent yields
/// [`Xfl::Invalid`](crate::Xfl::Invalid) so batch callers can test and skip.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Value does not fit the declared unsigned width
    #[error("{value} is out of range for a {bits}-bit field (max {max})")]
    Range { value: String, bits: u32, max: String },

    /// Input could not be parsed as hex or as a decimal number
    #[error("malformed input {input:?}: {reason}")]
    Format { input: String, reason: String },

    /// Negative raw integer, or the overflow sentinel, handed to an XFL decoder
    #[error("invalid XFL")]
    InvalidXfl,

    /// The address collaborator rejected its input
    #[error("address conversion failed: {0}")]
    Address(String),
}

impl CodecError {
    pub(crate) fn format(input: &str, reason: &str) -> CodecError {
        CodecError::Format {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_message() {
        let error = CodecError::Range {
            value: "256".to_string(),
            bits: 8,
            max: "255".to_string(),
        };
        let expected = "256 is out of range for a 8-bit field (max 255)";
        let actual = error.to_string();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_format_message() {
        let error = CodecError::format("0xZZ", "not a hex digit");
        let expected = "malformed input \"0xZZ\": not a hex digit";
        let actual = error.to_string();
        assert_eq!(expected, actual);
    }
}
