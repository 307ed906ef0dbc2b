//! Errors reported by tree construction, the codec and the text adapters.

use thiserror::Error;

/// Every failure the crate can report. None of them is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("unknown symbol at input position {position}")]
    UnknownSymbol { position: usize },

    /// Decode needed a child that does not exist
    #[error("malformed encoding: no branch for bit at position {position}")]
    MalformedEncoding { position: usize },

    /// Decode ran out of input in the middle of a code
    #[error("truncated encoding: input ends {pending} bit(s) into an incomplete code")]
    TruncatedEncoding { pending: usize },

    #[error("cannot decode {len} bit(s) with an empty tree")]
    EmptyTreeDecode { len: usize },

    /// A bit string contained something other than `0`, `1` or whitespace
    #[error("invalid bit character {found:?} at position {position}")]
    InvalidBitCharacter {
        found: char,
        position: usize,
    },

    #[error("invalid frequency table: {message}")]
    InvalidFrequencies { message: String },

    #[error("invalid transcript: {message}")]
    InvalidTranscript { message: String },
}

impl HuffmanError {
    pub fn invalid_frequencies<S: Into<String>>(message: S) -> Self {
        Self::InvalidFrequencies {
            message: message.into(),
        }
    }

    pub fn invalid_transcript<S: Into<String>>(message: S) -> Self {
        Self::InvalidTranscript {
            message: message.into(),
        }
    }

    /// Short label for logging.
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownSymbol { .. } => "encode",
            Self::MalformedEncoding { .. }
            | Self::TruncatedEncoding { .. }
            | Self::EmptyTreeDecode { .. } => "decode",
            Self::InvalidBitCharacter { .. } => "bits",
            Self::InvalidFrequencies { .. } => "frequencies",
            Self::InvalidTranscript { .. } => "transcript",
        }
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
