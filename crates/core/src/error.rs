//! Error types for the RTSP codec.

use std::fmt;

use crate::protocol::RtspResponse;

/// Errors that can occur while reading or writing RTSP messages.
///
/// Variants map to specific failure modes:
///
/// - **Stream**: [`Io`](Self::Io): the underlying reader or writer failed,
///   or the stream ended inside the header block.
/// - **Syntax**: [`Parse`](Self::Parse): the bytes are not a well-formed
///   RTSP message (RFC 2326 §6, §7).
/// - **Body**: [`IncompleteBody`](Self::IncompleteBody): a response
///   announced more body bytes than the stream delivered.
/// - **Write**: [`InvalidHeader`](Self::InvalidHeader): a header would not
///   survive serialization as one `Name: Value` line.
#[derive(Debug, thiserror::Error)]
pub enum RtspError {
    /// Underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse an RTSP message.
    #[error("RTSP parse error: {kind}")]
    Parse { kind: ParseErrorKind },

    /// The stream ended before the `Content-Length` bytes of a response
    /// body arrived. `partial` holds the response with whatever body bytes
    /// were read.
    #[error("incomplete body: expected {expected} bytes, received {received}")]
    IncompleteBody {
        expected: usize,
        received: usize,
        partial: Box<RtspResponse>,
    },

    /// A header about to be written has an empty name, a colon in its name,
    /// or a CR/LF in its name or value.
    #[error("header {name:?} cannot be written as a single field line")]
    InvalidHeader { name: String },
}

impl RtspError {
    pub(crate) fn parse(kind: ParseErrorKind) -> Self {
        RtspError::Parse { kind }
    }

    /// Returns the parse failure kind, if this is a [`Parse`](Self::Parse) error.
    pub fn kind(&self) -> Option<&ParseErrorKind> {
        match self {
            RtspError::Parse { kind } => Some(kind),
            _ => None,
        }
    }

    /// True when the stream held no bytes at all, i.e. the peer closed
    /// cleanly between messages.
    pub fn is_empty_message(&self) -> bool {
        matches!(self.kind(), Some(ParseErrorKind::EmptyMessage))
    }
}

/// Specific kind of RTSP parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The stream ended before any byte of the start line.
    EmptyMessage,
    /// Request line did not have the expected `Method URI Version` format,
    /// or the stream ended before its line feed.
    MalformedRequestLine(String),
    /// Status line did not have the expected `Version Code Reason` format,
    /// or its code is not an integer.
    MalformedStatusLine(String),
    /// Method token is not one of the RTSP methods.
    UnknownMethod(String),
    /// Status code is an integer but not in the RTSP status table.
    UnknownStatus(i64),
    /// A header line did not contain a colon separator.
    MalformedHeader(String),
    /// A response `Content-Length` value is not a non-negative integer.
    MalformedContentLength(String),
    /// A start or header line exceeded the configured limit.
    LineTooLong { limit: usize },
    /// `Content-Length` exceeds the configured body limit.
    BodyTooLarge { declared: usize, limit: usize },
    /// Start or header line is not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "empty message"),
            Self::MalformedRequestLine(line) => write!(f, "malformed request line: {line:?}"),
            Self::MalformedStatusLine(line) => write!(f, "malformed status line: {line:?}"),
            Self::UnknownMethod(token) => write!(f, "unknown method: {token}"),
            Self::UnknownStatus(code) => write!(f, "unknown status code: {code}"),
            Self::MalformedHeader(line) => write!(f, "malformed header: {line:?}"),
            Self::MalformedContentLength(value) => {
                write!(f, "malformed Content-Length: {value:?}")
            }
            Self::LineTooLong { limit } => write!(f, "line longer than {limit} bytes"),
            Self::BodyTooLarge { declared, limit } => {
                write!(f, "body of {declared} bytes exceeds limit of {limit}")
            }
            Self::InvalidUtf8 => write!(f, "invalid UTF-8"),
        }
    }
}

/// Convenience alias for `Result<T, RtspError>`.
pub type Result<T> = std::result::Result<T, RtspError>;
